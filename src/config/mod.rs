//! Configuration module for labkit.
//!
//! Default parameters of every helper, optionally loaded from a TOML file
//! (with `std` feature) and validated before use.

mod disco;
mod measurement;
mod stepper;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use disco::DiscoConfig;
pub use measurement::{MeasurementConfig, PinName, ThresholdConfig, DEFAULT_THRESHOLD};
pub use stepper::StepperConfig;
pub use system::LabConfig;
pub use validation::{
    validate_config, validate_disco, validate_measurement, validate_pin_name, validate_stepper,
};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Millis, StepsPerSec};
