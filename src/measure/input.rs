//! Analog input and tick source seams.

use core::fmt::Debug;

/// Single-channel analog input returning raw converter counts.
///
/// Implement this for the board's ADC channel; a 12-bit converter yields
/// readings in `0..=4095`.
pub trait AnalogInput {
    /// Error returned by a failed conversion.
    type Error: Debug;

    /// Perform one blocking conversion.
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    type Error = T::Error;

    #[inline]
    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        (**self).read_raw()
    }
}

/// Coarse millisecond tick source used to keep results file names unique.
pub trait Clock {
    /// Current tick count in milliseconds.
    fn ticks_ms(&mut self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &mut T {
    #[inline]
    fn ticks_ms(&mut self) -> u64 {
        (**self).ticks_ms()
    }
}

/// Wall clock in milliseconds since the Unix epoch (std only).
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn ticks_ms(&mut self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
