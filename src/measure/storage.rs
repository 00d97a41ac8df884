//! CSV results files on the host filesystem (std only).

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::MeasurementConfig;
use crate::error::{message, Error, Result, StorageError};

use super::continuous::results_file_name;
use super::record::{Record, RecordSink};

fn io_message(e: &io::Error) -> heapless::String<128> {
    message(&e.to_string())
}

/// Full path of a results file: `<dir>/<pin><suffix>_<timestamp_ms>.csv`.
pub fn results_path<P: AsRef<Path>>(
    dir: P,
    pin: &str,
    suffix: &str,
    timestamp_ms: u64,
) -> Result<PathBuf> {
    let name = results_file_name(pin, suffix, timestamp_ms)?;
    Ok(dir.as_ref().join(name.as_str()))
}

/// Results file receiving one CSV line per record.
///
/// Writes go through a buffer; `close` flushes and releases the file.
/// Dropping an open `CsvFile` closes it as well.
#[derive(Debug)]
pub struct CsvFile {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl CsvFile {
    /// Create (or truncate) the file at `path`, creating missing parent
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Open` if the directory or file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(StorageError::Open(io_message(&e))))?;
        }
        let file =
            File::create(&path).map_err(|e| Error::Storage(StorageError::Open(io_message(&e))))?;

        debug!("measure: results file opened");
        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Create the results file named after a measurement's pin, suffix and
    /// `timestamp_ms`, inside its results directory.
    pub fn for_measurement(config: &MeasurementConfig, timestamp_ms: u64) -> Result<Self> {
        let path = results_path(
            config.results_dir.as_str(),
            config.pin.as_str(),
            config.file_name.as_str(),
            timestamp_ms,
        )?;
        Self::create(path)
    }

    /// Path of the file.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file has been closed.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }
}

impl RecordSink for CsvFile {
    type Error = io::Error;

    fn write_record(&mut self, record: &Record) -> io::Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "results file closed"))?;
        writeln!(writer, "{}", record)
    }

    fn close(&mut self) -> io::Result<()> {
        match self.writer.take() {
            Some(mut writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for CsvFile {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// Read a results file back into records.
///
/// # Errors
///
/// Returns `StorageError::Read` if the file cannot be read and
/// `StorageError::Malformed` for the first line that is not a record.
/// Blank lines are skipped.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let file =
        File::open(path.as_ref()).map_err(|e| Error::Storage(StorageError::Read(io_message(&e))))?;

    let mut records = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| Error::Storage(StorageError::Read(io_message(&e))))?;
        if line.trim().is_empty() {
            continue;
        }
        let record = Record::parse(&line).ok_or(Error::Storage(StorageError::Malformed {
            line: index as u32 + 1,
        }))?;
        records.push(record);
    }
    Ok(records)
}
