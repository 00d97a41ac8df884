//! Configuration validation.

use crate::error::{message, ConfigError, Error, Result};

use super::{DiscoConfig, LabConfig, MeasurementConfig, StepperConfig};

/// Validate a lab configuration.
///
/// Checks:
/// - Stepper speed is positive
/// - Measurement interval is positive
/// - LED period is positive
/// - Pin names are non-empty and safe to embed in a file name
pub fn validate_config(config: &LabConfig) -> Result<()> {
    validate_stepper(&config.stepper)?;
    validate_measurement(&config.measurement)?;
    validate_pin_name(config.threshold.pin.as_str())?;
    validate_disco(&config.disco)?;
    Ok(())
}

/// Validate stepper parameters.
pub fn validate_stepper(config: &StepperConfig) -> Result<()> {
    if config.speed.0 == 0 {
        return Err(Error::Config(ConfigError::InvalidSpeed(config.speed.0)));
    }
    Ok(())
}

/// Validate continuous measurement parameters.
pub fn validate_measurement(config: &MeasurementConfig) -> Result<()> {
    if config.interval.is_zero() {
        return Err(Error::Config(ConfigError::InvalidInterval(config.interval.0)));
    }
    validate_pin_name(config.pin.as_str())?;
    if !is_file_safe(config.file_name.as_str()) {
        return Err(Error::Config(ConfigError::InvalidPinName(
            message(config.file_name.as_str()),
        )));
    }
    Ok(())
}

/// Validate LED cycler parameters.
pub fn validate_disco(config: &DiscoConfig) -> Result<()> {
    if config.period.is_zero() {
        return Err(Error::Config(ConfigError::InvalidPeriod(config.period.0)));
    }
    Ok(())
}

/// Validate a pin name.
pub fn validate_pin_name(name: &str) -> Result<()> {
    if name.is_empty() || !is_file_safe(name) {
        return Err(Error::Config(ConfigError::InvalidPinName(
            message(name),
        )));
    }
    Ok(())
}

// Names end up inside `<dir>/<pin><suffix>_<ts>.csv`.
fn is_file_safe(name: &str) -> bool {
    !name.contains(['/', '\\', ':']) && !name.contains("..")
}
