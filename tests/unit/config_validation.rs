//! Unit tests for configuration validation.

use labkit::config::units::{Millis, StepsPerSec};
use labkit::config::{validate_config, LabConfig};
use labkit::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[stepper]
steps = 5
speed = 1

[measurement]
duration_ms = 1000
interval_ms = 1
pin = "X8"
"#;

    let config: LabConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a stationary stepper speed.
#[test]
fn test_zero_speed() {
    let mut config = LabConfig::default();
    config.stepper.speed = StepsPerSec(0);

    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidSpeed(0)))
    );
}

/// Test validation fails for a zero sampling interval.
#[test]
fn test_zero_interval() {
    let toml_str = r#"
[measurement]
interval_ms = 0
"#;

    let config: LabConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidInterval(0)))
    );
}

/// Test validation fails for a zero LED period.
#[test]
fn test_zero_period() {
    let mut config = LabConfig::default();
    config.disco.period = Millis(0);

    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidPeriod(0)))
    );
}

/// Test validation fails for pin names that would escape the results folder.
#[test]
fn test_unsafe_pin_names() {
    for pin in ["", "../X1", "X/1", "C:X1"] {
        let mut config = LabConfig::default();
        config.measurement.pin = pin.try_into().unwrap();

        let result = validate_config(&config);
        assert!(
            matches!(result, Err(Error::Config(ConfigError::InvalidPinName(_)))),
            "pin {:?} accepted",
            pin
        );
    }
}

/// Test validation fails for a threshold sensor without a pin.
#[test]
fn test_threshold_pin_checked() {
    let mut config = LabConfig::default();
    config.threshold.pin.clear();

    assert!(validate_config(&config).is_err());
}

/// Test validation fails for a file suffix containing a path separator.
#[test]
fn test_unsafe_file_name() {
    let mut config = LabConfig::default();
    config.measurement.file_name = "/etc".try_into().unwrap();

    assert!(validate_config(&config).is_err());
}
