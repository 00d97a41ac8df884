//! Student-facing helpers.
//!
//! Thin wrappers around the drivers that add the console messages students
//! see at the prompt. Each call blocks until it completes or its cancel
//! token fires.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, StatefulOutputPin};

use crate::cancel::CancelToken;
use crate::config::{DiscoConfig, MeasurementConfig, StepperConfig, ThresholdConfig};
use crate::console::print_line;
use crate::disco::{Disco, DiscoReport};
use crate::error::Result;
use crate::measure::{AnalogInput, MeasurementOutcome, MeasurementReport, RecordSink, Sampler};
use crate::stepper::{MoveReport, Stepper};

pub use crate::console::cls;
pub use crate::help::{print_help as what, HelpEntry};

/// Move the stepper as described by `config`.
///
/// Prints `Stepper Motor Started` and, once the coils are released,
/// `Stepper Motor Stopped`.
pub fn move_stepper<P, DELAY, W, C>(
    stepper: &mut Stepper<P, DELAY>,
    config: &StepperConfig,
    console: &mut W,
    cancel: &C,
) -> Result<MoveReport>
where
    P: OutputPin,
    DELAY: DelayNs,
    W: Write,
    C: CancelToken,
{
    print_line(console, format_args!("Stepper Motor Started"));
    let report = stepper.run(config, cancel)?;
    print_line(console, format_args!("Stepper Motor Stopped"));
    Ok(report)
}

/// Run a continuous measurement into any record sink.
///
/// Prints `Measurment stopped` when cancelled and `Measurment finished` at
/// the end.
pub fn start_continuous_measurement_into<A, DELAY, S, W, C>(
    sampler: &mut Sampler<A, DELAY>,
    config: &MeasurementConfig,
    sink: &mut S,
    console: &mut W,
    cancel: &C,
) -> Result<MeasurementReport>
where
    A: AnalogInput,
    DELAY: DelayNs,
    S: RecordSink,
    W: Write,
    C: CancelToken,
{
    let report = sampler.run(config, sink, console, cancel)?;
    if report.outcome == MeasurementOutcome::Interrupted {
        print_line(console, format_args!("Measurment stopped"));
    }
    print_line(console, format_args!("Measurment finished"));
    Ok(report)
}

/// Run a continuous measurement into a new CSV file (std only).
///
/// The file is `<results_dir>/<pin><file_name>_<ticks>.csv`, with `ticks`
/// read from `clock`. Returns the file path along with the report.
#[cfg(feature = "std")]
pub fn start_continuous_measurement<A, DELAY, K, W, C>(
    sampler: &mut Sampler<A, DELAY>,
    config: &MeasurementConfig,
    clock: &mut K,
    console: &mut W,
    cancel: &C,
) -> Result<(std::path::PathBuf, MeasurementReport)>
where
    A: AnalogInput,
    DELAY: DelayNs,
    K: crate::measure::Clock,
    W: Write,
    C: CancelToken,
{
    let mut file = crate::measure::CsvFile::for_measurement(config, clock.ticks_ms())?;
    let report = start_continuous_measurement_into(sampler, config, &mut file, console, cancel)?;
    Ok((file.path().to_path_buf(), report))
}

/// Single thresholded reading against `config.threshold`.
///
/// The channel is whatever `adc` was opened on. `config.pin` only names it
/// and is checked by validation.
pub fn boolean_measurement<A: AnalogInput>(adc: &mut A, config: &ThresholdConfig) -> Result<u8> {
    crate::measure::boolean_measurement_with(adc, config)
}

/// Cycle the LEDs until cancelled.
pub fn disco<L, DELAY, C>(
    leds: &mut Disco<L, DELAY>,
    config: &DiscoConfig,
    cancel: &C,
) -> Result<DiscoReport>
where
    L: StatefulOutputPin,
    DELAY: DelayNs,
    C: CancelToken,
{
    leds.run(config, cancel)
}
