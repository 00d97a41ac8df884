//! Measurement module for labkit.
//!
//! Analog sampling: continuous logging into CSV records and single-shot
//! threshold sensing.

mod continuous;
mod input;
mod record;
#[cfg(feature = "std")]
mod storage;
mod threshold;

pub use continuous::{
    results_file_name, MeasurementOutcome, MeasurementReport, Sampler, MAX_FILE_NAME,
};
pub use input::{AnalogInput, Clock};
pub use record::{CsvWriter, Record, RecordSink};
pub use threshold::{boolean_measurement, boolean_measurement_with, exceeds};

#[cfg(feature = "std")]
pub use input::SystemClock;
#[cfg(feature = "std")]
pub use storage::{read_records, results_path, CsvFile};
