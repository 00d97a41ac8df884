//! Lab configuration - root configuration structure.

use serde::Deserialize;

use super::disco::DiscoConfig;
use super::measurement::{MeasurementConfig, ThresholdConfig};
use super::stepper::StepperConfig;

/// Root configuration structure from TOML.
///
/// Every section is optional; missing sections and keys take the helpers'
/// default parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Stepper defaults.
    pub stepper: StepperConfig,

    /// Continuous measurement defaults.
    pub measurement: MeasurementConfig,

    /// Boolean measurement defaults.
    pub threshold: ThresholdConfig,

    /// LED cycler defaults.
    pub disco: DiscoConfig,
}
