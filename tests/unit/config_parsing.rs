//! Unit tests for TOML configuration parsing.

use labkit::config::units::{Millis, StepsPerSec};
use labkit::config::{parse_config, LabConfig, DEFAULT_THRESHOLD};

/// Test parsing a complete lab configuration from TOML.
#[test]
fn test_parse_full_config() {
    let toml_str = r#"
[stepper]
steps = -20
speed = 250

[measurement]
duration_ms = 60000
interval_ms = 100
pin = "Y4"
file_name = "_pendulum"
results_dir = "/flash/Results"

[threshold]
pin = "X2"
threshold = 1000

[disco]
period_ms = 80
"#;

    let config: LabConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.stepper.steps, -20);
    assert_eq!(config.stepper.speed, StepsPerSec(250));
    assert_eq!(config.measurement.duration, Millis(60_000));
    assert_eq!(config.measurement.interval, Millis(100));
    assert_eq!(config.measurement.pin.as_str(), "Y4");
    assert_eq!(config.measurement.file_name.as_str(), "_pendulum");
    assert_eq!(config.measurement.results_dir.as_str(), "/flash/Results");
    assert!(!config.measurement.is_indefinite());
    assert_eq!(config.threshold.pin.as_str(), "X2");
    assert_eq!(config.threshold.threshold, 1000);
    assert_eq!(config.disco.period, Millis(80));
}

/// Test that every omitted key falls back to the helper defaults.
#[test]
fn test_defaults() {
    let config: LabConfig = toml::from_str("").expect("Failed to parse TOML");

    assert_eq!(config.stepper.steps, 10);
    assert_eq!(config.stepper.speed, StepsPerSec(100));
    assert_eq!(config.measurement.duration, Millis(0));
    assert!(config.measurement.is_indefinite());
    assert_eq!(config.measurement.interval, Millis(500));
    assert_eq!(config.measurement.pin.as_str(), "X1");
    assert_eq!(config.measurement.file_name.as_str(), "");
    assert_eq!(config.measurement.results_dir.as_str(), "./Results");
    assert_eq!(config.threshold.pin.as_str(), "X1");
    assert_eq!(config.threshold.threshold, DEFAULT_THRESHOLD);
    assert_eq!(config.disco.period, Millis(50));
}

/// Test that a single key only overrides itself.
#[test]
fn test_partial_section() {
    let config = parse_config("[threshold]\nthreshold = 4000\n").expect("Failed to parse");

    assert_eq!(config.threshold.threshold, 4000);
    assert_eq!(config.threshold.pin.as_str(), "X1");
    assert_eq!(config.stepper, LabConfig::default().stepper);
}

/// Test parsing fails for a negative interval.
#[test]
fn test_negative_interval_rejected() {
    assert!(parse_config("[measurement]\ninterval_ms = -5\n").is_err());
}

/// Test parsing fails for a threshold outside the ADC range type.
#[test]
fn test_threshold_out_of_range() {
    assert!(parse_config("[threshold]\nthreshold = 70000\n").is_err());
}

/// Test parsing fails for a pin name that does not fit.
#[test]
fn test_pin_name_too_long() {
    assert!(parse_config("[measurement]\npin = \"a_pin_name_far_too_long\"\n").is_err());
}
