//! Threshold-based boolean sensing.

use crate::config::ThresholdConfig;
use crate::error::{HardwareError, Result};

use super::input::AnalogInput;

/// Whether `reading` counts as a logical 1. Equal readings count as 0.
#[inline]
pub fn exceeds(reading: u16, threshold: u16) -> bool {
    reading > threshold
}

/// Take one reading and classify it against `threshold`.
///
/// Returns `1` if the raw reading is strictly above the threshold, `0`
/// otherwise.
///
/// # Errors
///
/// Returns `HardwareError::Adc` if the conversion fails.
pub fn boolean_measurement<A: AnalogInput>(adc: &mut A, threshold: u16) -> Result<u8> {
    let reading = adc.read_raw().map_err(|_| HardwareError::Adc)?;
    let state = exceeds(reading, threshold);
    debug!("threshold: {} vs {} -> {}", reading, threshold, u8::from(state));
    Ok(u8::from(state))
}

/// [`boolean_measurement`] with the threshold from a [`ThresholdConfig`].
pub fn boolean_measurement_with<A: AnalogInput>(adc: &mut A, config: &ThresholdConfig) -> Result<u8> {
    boolean_measurement(adc, config.threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_THRESHOLD;
    use crate::error::Error;

    struct Fixed(Option<u16>);

    impl AnalogInput for Fixed {
        type Error = ();

        fn read_raw(&mut self) -> core::result::Result<u16, ()> {
            self.0.ok_or(())
        }
    }

    #[test]
    fn test_boundary_is_zero() {
        assert_eq!(boolean_measurement(&mut Fixed(Some(2730)), 2730), Ok(0));
        assert_eq!(boolean_measurement(&mut Fixed(Some(2731)), 2730), Ok(1));
        assert_eq!(boolean_measurement(&mut Fixed(Some(0)), 2730), Ok(0));
    }

    #[test]
    fn test_default_config() {
        let config = ThresholdConfig::default();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(boolean_measurement_with(&mut Fixed(Some(4095)), &config), Ok(1));
    }

    #[test]
    fn test_read_failure_propagates() {
        assert_eq!(
            boolean_measurement(&mut Fixed(None), 100),
            Err(Error::Hardware(HardwareError::Adc))
        );
    }
}
