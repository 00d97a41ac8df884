//! LED cycler defaults.

use serde::Deserialize;

use super::units::Millis;

/// Parameters for the LED disco loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiscoConfig {
    /// Delay between two toggles.
    #[serde(rename = "period_ms")]
    pub period: Millis,
}

impl Default for DiscoConfig {
    fn default() -> Self {
        Self { period: Millis(50) }
    }
}
