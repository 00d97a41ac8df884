//! Analog measurement defaults.

use heapless::String;
use serde::Deserialize;

use super::units::{Millis, ADC_FULL_SCALE_12BIT};

/// Board pin name such as `X1`.
pub type PinName = String<16>;

/// Default threshold: two thirds of a 12-bit full-scale reading.
pub const DEFAULT_THRESHOLD: u16 = (ADC_FULL_SCALE_12BIT as u32 * 2 / 3) as u16;

/// Parameters for a continuous measurement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MeasurementConfig {
    /// Upper bound on the measurement length; zero samples until cancelled.
    #[serde(rename = "duration_ms")]
    pub duration: Millis,

    /// Time between two consecutive samples.
    #[serde(rename = "interval_ms")]
    pub interval: Millis,

    /// Analog input pin name, used in the results file name.
    pub pin: PinName,

    /// Caller suffix appended to the pin name in the results file name.
    pub file_name: String<32>,

    /// Directory receiving the CSV files.
    pub results_dir: String<64>,
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            duration: Millis::ZERO,
            interval: Millis(500),
            pin: default_pin(),
            file_name: String::new(),
            results_dir: String::try_from("./Results").unwrap_or_default(),
        }
    }
}

impl MeasurementConfig {
    /// Whether sampling runs until cancelled.
    #[inline]
    pub fn is_indefinite(&self) -> bool {
        self.duration.is_zero()
    }

    /// Bound the measurement to `duration`.
    pub fn with_duration(mut self, duration: Millis) -> Self {
        self.duration = duration;
        self
    }

    /// Sample every `interval`.
    pub fn with_interval(mut self, interval: Millis) -> Self {
        self.interval = interval;
        self
    }
}

/// Parameters for a boolean measurement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Name of the pin the caller opens the ADC channel on. Validated,
    /// never read by the sampler itself.
    pub pin: PinName,

    /// Raw readings strictly above this value count as 1.
    pub threshold: u16,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            pin: default_pin(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

fn default_pin() -> PinName {
    String::try_from("X1").unwrap_or_default()
}
