//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{message, ConfigError, Error, Result};

use super::validation::validate_config;
use super::LabConfig;

/// Load and validate a lab configuration from a TOML file.
///
/// # Errors
///
/// Returns `ConfigError::IoError` naming the path if the file cannot be
/// read, otherwise any error from [`parse_config`].
///
/// # Example
///
/// ```rust,ignore
/// use labkit::load_config;
///
/// let config = load_config("lab.toml")?;
/// lab::move_stepper(&mut stepper, &config.stepper, &mut console, &STOP)?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LabConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::IoError(message(&format!(
            "{}: {}",
            path.display(),
            e
        ))))
    })?;

    parse_config(&content)
}

/// Parse and validate a lab configuration from TOML text.
///
/// Missing sections and keys take the helper defaults.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` prefixed with the offending line, or
/// the first validation error.
pub fn parse_config(content: &str) -> Result<LabConfig> {
    let config: LabConfig = toml::from_str(content).map_err(|e| parse_error(content, &e))?;
    validate_config(&config)?;

    debug!("config: stepper speed {} steps/s", config.stepper.speed.0);
    Ok(config)
}

fn parse_error(content: &str, e: &toml::de::Error) -> Error {
    let text = match e.span().and_then(|span| content.get(..span.start)) {
        Some(before) => format!("line {}: {}", before.matches('\n').count() + 1, e.message()),
        None => e.message().to_string(),
    };
    Error::Config(ConfigError::ParseError(message(&text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Millis, StepsPerSec};

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, LabConfig::default());
    }

    #[test]
    fn test_parse_partial_sections() {
        let toml = r#"
[stepper]
steps = -25

[measurement]
duration_ms = 10000
pin = "X3"
file_name = "_pendulum"
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.stepper.steps, -25);
        assert_eq!(config.stepper.speed, StepsPerSec(100));
        assert_eq!(config.measurement.duration, Millis(10_000));
        assert_eq!(config.measurement.interval, Millis(500));
        assert_eq!(config.measurement.pin.as_str(), "X3");
        assert_eq!(config.measurement.file_name.as_str(), "_pendulum");
        assert_eq!(config.threshold.threshold, 2730);
    }

    #[test]
    fn test_parse_rejects_zero_speed() {
        let toml = r#"
[stepper]
speed = 0
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::InvalidSpeed(0)))
        ));
    }

    #[test]
    fn test_parse_rejects_negative_interval() {
        let toml = r#"
[measurement]
interval_ms = -5
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_parse_error_names_line() {
        let toml = "[stepper]\nsteps = 3\nspeed = =\n";

        match parse_config(toml) {
            Err(Error::Config(ConfigError::ParseError(msg))) => {
                assert!(msg.starts_with("line 3: "), "{}", msg);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_names_path() {
        match load_config("no/such/lab.toml") {
            Err(Error::Config(ConfigError::IoError(msg))) => {
                assert!(msg.starts_with("no/such/lab.toml: "), "{}", msg);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
