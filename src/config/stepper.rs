//! Stepper helper defaults.

use serde::Deserialize;

use super::units::StepsPerSec;

/// Parameters for one `move_stepper` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StepperConfig {
    /// Signed number of phase-table traversals (negative runs in reverse).
    pub steps: i32,

    /// Phase rate in steps per second.
    pub speed: StepsPerSec,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            steps: 10,
            speed: StepsPerSec(100),
        }
    }
}

impl StepperConfig {
    /// Same speed, different step count.
    pub fn with_steps(mut self, steps: i32) -> Self {
        self.steps = steps;
        self
    }

    /// Same step count, different speed.
    pub fn with_speed(mut self, speed: StepsPerSec) -> Self {
        self.speed = speed;
        self
    }
}
