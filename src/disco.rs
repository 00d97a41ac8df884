//! LED "disco" cycler.
//!
//! Toggles the board's four LEDs in rotation until cancelled. A quick way
//! for students to check that the board answers before an experiment.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::StatefulOutputPin;

use crate::cancel::CancelToken;
use crate::config::DiscoConfig;
use crate::error::{ConfigError, Error, HardwareError, Result};

/// Number of LEDs in the rotation.
pub const LED_COUNT: usize = 4;

/// Summary of a finished disco run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoReport {
    /// Number of toggles performed.
    pub toggles: u32,
    /// Index of the last LED toggled, if any.
    pub last_led: Option<usize>,
}

/// LED cycler.
///
/// Generic over:
/// - `L`: LED pin type (must implement `StatefulOutputPin`, high = lit)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct Disco<L, DELAY>
where
    L: StatefulOutputPin,
    DELAY: DelayNs,
{
    leds: [L; LED_COUNT],
    delay: DELAY,
}

impl<L, DELAY> Disco<L, DELAY>
where
    L: StatefulOutputPin,
    DELAY: DelayNs,
{
    /// Create a new cycler.
    pub fn new(leds: [L; LED_COUNT], delay: DELAY) -> Self {
        Self { leds, delay }
    }

    /// Release the LEDs and delay provider.
    pub fn release(self) -> ([L; LED_COUNT], DELAY) {
        (self.leds, self.delay)
    }

    /// Toggle one LED per period in round-robin order until cancelled.
    ///
    /// The rotation starts at LED 1, so the k-th toggle hits LED `k % 4`.
    /// All LEDs are switched off before returning, also when a toggle fails.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPeriod` for a zero period (no LED is
    /// touched) and `HardwareError::Led` if an LED operation fails.
    pub fn run<C: CancelToken>(&mut self, config: &DiscoConfig, cancel: &C) -> Result<DiscoReport> {
        if config.period.is_zero() {
            return Err(Error::Config(ConfigError::InvalidPeriod(config.period.0)));
        }

        info!("disco: started");
        let mut report = DiscoReport {
            toggles: 0,
            last_led: None,
        };
        let cycled = self.cycle(config.period.0, cancel, &mut report);
        let cleared = self.all_off();
        cycled?;
        cleared?;

        info!("disco: stopped after {} toggles", report.toggles);
        Ok(report)
    }

    /// Switch every LED off.
    ///
    /// A failing LED does not keep the others lit; the error is reported
    /// once all of them have been written.
    pub fn all_off(&mut self) -> Result<()> {
        let mut failed = false;
        for led in self.leds.iter_mut() {
            failed |= led.set_low().is_err();
        }
        if failed {
            return Err(Error::Hardware(HardwareError::Led));
        }
        Ok(())
    }

    fn cycle<C: CancelToken>(
        &mut self,
        period_ms: u32,
        cancel: &C,
        report: &mut DiscoReport,
    ) -> Result<()> {
        let mut index = 0;
        while !cancel.is_cancelled() {
            index = (index + 1) % LED_COUNT;
            self.leds[index].toggle().map_err(|_| HardwareError::Led)?;
            report.toggles = report.toggles.saturating_add(1);
            report.last_led = Some(index);
            self.delay.delay_ms(period_ms);
        }
        Ok(())
    }
}
