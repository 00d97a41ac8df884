//! Four-coil stepper driver.
//!
//! Generic over embedded-hal 1.0 output pins and delay.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::cancel::CancelToken;
use crate::config::units::StepsPerSec;
use crate::config::StepperConfig;
use crate::error::{ConfigError, Error, HardwareError, Result};

use super::phase::{Direction, PhaseTable};

/// How a move ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Every requested traversal was applied.
    Completed,
    /// The cancel token fired before the move finished.
    Interrupted,
}

/// Summary of a finished move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// How the move ended.
    pub outcome: MoveOutcome,
    /// Traversal direction.
    pub direction: Direction,
    /// Number of phase patterns applied to the coils.
    pub phases_applied: u32,
}

impl MoveReport {
    /// Whether the move ran to completion.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.outcome == MoveOutcome::Completed
    }

    /// Number of full phase-table traversals applied.
    #[inline]
    pub fn traversals(&self) -> u32 {
        self.phases_applied / PhaseTable::LEN as u32
    }
}

/// Stepper driver for a four-pin coil board.
///
/// Generic over:
/// - `P`: coil pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
///
/// Coil `n` receives bit `n` of each phase pattern, so pin order matters.
pub struct Stepper<P, DELAY>
where
    P: OutputPin,
    DELAY: DelayNs,
{
    /// Coil pins, bit 0 first.
    coils: [P; 4],

    /// Delay provider for phase timing.
    delay: DELAY,

    /// Electrical cycle.
    phases: PhaseTable,

    /// Pattern currently on the coils.
    energized: u8,
}

impl<P, DELAY> Stepper<P, DELAY>
where
    P: OutputPin,
    DELAY: DelayNs,
{
    /// Create a driver using the half-step table.
    ///
    /// The coils are assumed de-energized.
    pub fn new(coils: [P; 4], delay: DELAY) -> Self {
        Self {
            coils,
            delay,
            phases: PhaseTable::HALF_STEP,
            energized: 0,
        }
    }

    /// Use a different phase table.
    pub fn with_phase_table(mut self, phases: PhaseTable) -> Self {
        self.phases = phases;
        self
    }

    /// Get the phase table.
    #[inline]
    pub fn phase_table(&self) -> &PhaseTable {
        &self.phases
    }

    /// Pattern currently applied to the coils.
    #[inline]
    pub fn energized(&self) -> u8 {
        self.energized
    }

    /// Whether any coil is driven high.
    #[inline]
    pub fn is_energized(&self) -> bool {
        self.energized != 0
    }

    /// Run a move described by a [`StepperConfig`].
    pub fn run<C: CancelToken>(&mut self, config: &StepperConfig, cancel: &C) -> Result<MoveReport> {
        self.move_steps(config.steps, config.speed, cancel)
    }

    /// Traverse the phase table `|steps|` times, forward for positive
    /// counts and in reverse for negative ones, at `speed` phases per
    /// second.
    ///
    /// The token is polled before every phase. Whether the move completes,
    /// is cancelled or fails on a pin, all coils are driven low before
    /// returning.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSpeed` for a zero speed (no pin is
    /// touched), or `HardwareError::Pin` if a coil write fails.
    pub fn move_steps<C: CancelToken>(
        &mut self,
        steps: i32,
        speed: StepsPerSec,
        cancel: &C,
    ) -> Result<MoveReport> {
        let delay_ns = speed
            .phase_delay_ns()
            .ok_or(Error::Config(ConfigError::InvalidSpeed(speed.0)))?;
        let direction = Direction::from_steps(steps);

        info!("stepper: moving {} steps at {} steps/s", steps, speed.0);

        let mut phases_applied = 0;
        let driven = self.drive(
            steps.unsigned_abs(),
            direction,
            delay_ns,
            cancel,
            &mut phases_applied,
        );

        // Release runs even when driving failed; the first error wins.
        let released = self.de_energize().map(|()| self.delay.delay_ns(delay_ns));
        let outcome = driven?;
        released?;

        match outcome {
            MoveOutcome::Completed => info!("stepper: stopped after {} phases", phases_applied),
            MoveOutcome::Interrupted => {
                warn!("stepper: interrupted after {} phases", phases_applied)
            }
        }

        Ok(MoveReport {
            outcome,
            direction,
            phases_applied,
        })
    }

    /// Drive all coils low.
    ///
    /// Every coil is written even if an earlier one fails; the first
    /// failure is returned.
    pub fn de_energize(&mut self) -> Result<()> {
        let mut failed = false;
        for coil in self.coils.iter_mut() {
            failed |= coil.set_low().is_err();
        }
        if failed {
            warn!("stepper: a coil did not release");
            return Err(Error::Hardware(HardwareError::Pin));
        }
        self.energized = 0;
        Ok(())
    }

    /// Release the pins and delay provider.
    pub fn release(self) -> ([P; 4], DELAY) {
        (self.coils, self.delay)
    }

    fn drive<C: CancelToken>(
        &mut self,
        traversals: u32,
        direction: Direction,
        delay_ns: u32,
        cancel: &C,
        phases_applied: &mut u32,
    ) -> Result<MoveOutcome> {
        let phases = self.phases;
        for _ in 0..traversals {
            for pattern in phases.iter(direction) {
                if cancel.is_cancelled() {
                    return Ok(MoveOutcome::Interrupted);
                }
                self.apply(pattern)?;
                trace!("stepper: phase {}", pattern);
                self.delay.delay_ns(delay_ns);
                *phases_applied = phases_applied.saturating_add(1);
            }
        }
        Ok(MoveOutcome::Completed)
    }

    fn apply(&mut self, pattern: u8) -> Result<()> {
        for (n, coil) in self.coils.iter_mut().enumerate() {
            if pattern & (1 << n) != 0 {
                coil.set_high().map_err(|_| HardwareError::Pin)?;
            } else {
                coil.set_low().map_err(|_| HardwareError::Pin)?;
            }
        }
        self.energized = pattern;
        Ok(())
    }
}
