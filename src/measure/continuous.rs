//! Continuous sampling into a record sink.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use crate::cancel::CancelToken;
use crate::config::units::Millis;
use crate::config::{validate_pin_name, MeasurementConfig};
use crate::console::redraw_line;
use crate::error::{ConfigError, Error, HardwareError, Result, StorageError};

use super::input::AnalogInput;
use super::record::{Record, RecordSink};

/// Longest generated results file name.
///
/// Fits the longest configurable pin (16) and suffix (32) followed by
/// `_<u64 ticks>.csv`.
pub const MAX_FILE_NAME: usize = 80;

/// How a measurement ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementOutcome {
    /// The duration bound was reached.
    Completed,
    /// The cancel token fired.
    Interrupted,
}

/// Summary of a finished measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementReport {
    /// How the measurement ended.
    pub outcome: MeasurementOutcome,
    /// Number of records written.
    pub records: u32,
    /// Elapsed value of the last record written.
    pub last_elapsed: Option<Millis>,
}

/// Build `<pin><suffix>_<timestamp_ms>.csv`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidPinName` for an unusable pin name and
/// `ConfigError::NameTooLong` if the name exceeds [`MAX_FILE_NAME`].
pub fn results_file_name(
    pin: &str,
    suffix: &str,
    timestamp_ms: u64,
) -> Result<heapless::String<MAX_FILE_NAME>> {
    validate_pin_name(pin)?;
    let mut name = heapless::String::new();
    write!(name, "{}{}_{}.csv", pin, suffix, timestamp_ms)
        .map_err(|_| Error::Config(ConfigError::NameTooLong))?;
    Ok(name)
}

/// Periodic sampler for one analog input.
///
/// Generic over:
/// - `A`: analog input (must implement [`AnalogInput`])
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct Sampler<A, DELAY>
where
    A: AnalogInput,
    DELAY: DelayNs,
{
    adc: A,
    delay: DELAY,
}

impl<A, DELAY> Sampler<A, DELAY>
where
    A: AnalogInput,
    DELAY: DelayNs,
{
    /// Create a new sampler.
    pub fn new(adc: A, delay: DELAY) -> Self {
        Self { adc, delay }
    }

    /// Release the input and delay provider.
    pub fn release(self) -> (A, DELAY) {
        (self.adc, self.delay)
    }

    /// Sample until the duration bound is reached or the token fires.
    ///
    /// A zero duration samples indefinitely. Otherwise one record is written
    /// for every elapsed value `0, interval, 2 * interval, ...` strictly
    /// below the duration. Each iteration reads the input once, appends a
    /// record, clears the console, prints the reading and waits one
    /// interval. The token is polled before every sample in both modes.
    ///
    /// The sink is closed on every exit path, including errors.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidInterval` for a zero interval (the sink
    /// is still closed), `HardwareError::Adc` on a failed read, and
    /// `StorageError` if the sink rejects a record or fails to close.
    pub fn run<S, W, C>(
        &mut self,
        config: &MeasurementConfig,
        sink: &mut S,
        console: &mut W,
        cancel: &C,
    ) -> Result<MeasurementReport>
    where
        S: RecordSink,
        W: Write,
        C: CancelToken,
    {
        let mut report = MeasurementReport {
            outcome: MeasurementOutcome::Completed,
            records: 0,
            last_elapsed: None,
        };

        info!(
            "measure: sampling every {} ms for {} ms (0 = until stopped)",
            config.interval.0,
            config.duration.0
        );

        let sampled = self.sample(config, sink, console, cancel, &mut report);

        let closed = sink.close().map_err(|_| Error::Storage(StorageError::Close));
        report.outcome = sampled?;
        closed?;

        info!("measure: {} records written", report.records);
        Ok(report)
    }

    fn sample<S, W, C>(
        &mut self,
        config: &MeasurementConfig,
        sink: &mut S,
        console: &mut W,
        cancel: &C,
        report: &mut MeasurementReport,
    ) -> Result<MeasurementOutcome>
    where
        S: RecordSink,
        W: Write,
        C: CancelToken,
    {
        let interval = config.interval;
        if interval.is_zero() {
            return Err(Error::Config(ConfigError::InvalidInterval(interval.0)));
        }
        let bound = (!config.is_indefinite()).then_some(config.duration);

        let mut elapsed = Millis::ZERO;
        loop {
            if bound.is_some_and(|limit| elapsed >= limit) {
                return Ok(MeasurementOutcome::Completed);
            }
            if cancel.is_cancelled() {
                warn!("measure: interrupted at {} ms", elapsed.0);
                return Ok(MeasurementOutcome::Interrupted);
            }

            let reading = self.adc.read_raw().map_err(|_| HardwareError::Adc)?;
            let record = Record::new(elapsed.0, reading);
            sink.write_record(&record)
                .map_err(|_| StorageError::Write)?;
            report.records += 1;
            report.last_elapsed = Some(elapsed);
            trace!("measure: {} ms -> {}", elapsed.0, reading);

            redraw_line(console, format_args!("{}", reading));

            self.delay.delay_ms(interval.0);

            elapsed = match elapsed.checked_add(interval) {
                Some(next) => next,
                None => {
                    warn!("measure: elapsed counter exhausted");
                    return Ok(MeasurementOutcome::Completed);
                }
            };
        }
    }
}
