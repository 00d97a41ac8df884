//! Unit types for timing quantities.
//!
//! Unsigned newtypes so negative rates and intervals cannot be expressed;
//! zero is rejected by validation.

use serde::Deserialize;

/// Full-scale raw reading of a 12-bit ADC.
pub const ADC_FULL_SCALE_12BIT: u16 = 4095;

/// Stepper rate in steps per second.
///
/// One step here is one phase of the phase table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct StepsPerSec(pub u32);

impl StepsPerSec {
    /// Delay between two phases in nanoseconds (`1 / speed` seconds).
    ///
    /// Returns `None` for a zero rate.
    #[inline]
    pub fn phase_delay_ns(self) -> Option<u32> {
        1_000_000_000u32.checked_div(self.0)
    }
}

/// Duration in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Millis(pub u32);

impl Millis {
    /// Zero duration.
    pub const ZERO: Self = Self(0);

    /// Check for zero duration.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `self + rhs`, or `None` past `u32::MAX` milliseconds.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }
}
