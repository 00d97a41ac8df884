//! Measurement records and the sinks that store them.

use core::fmt::{self, Debug, Write};

/// One sample: elapsed time since the measurement started and the raw reading.
///
/// Rendered as `<elapsed_ms>,<reading>` without a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Milliseconds since the first sample.
    pub elapsed_ms: u32,
    /// Raw converter counts.
    pub reading: u16,
}

impl Record {
    /// Create a new record.
    #[inline]
    pub const fn new(elapsed_ms: u32, reading: u16) -> Self {
        Self {
            elapsed_ms,
            reading,
        }
    }

    /// Parse one CSV line, with or without its trailing newline.
    pub fn parse(line: &str) -> Option<Self> {
        let (elapsed, reading) = line.trim_end_matches(['\r', '\n']).split_once(',')?;
        Some(Self {
            elapsed_ms: elapsed.trim().parse().ok()?,
            reading: reading.trim().parse().ok()?,
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.elapsed_ms, self.reading)
    }
}

/// Destination for measurement records.
///
/// `close` is called exactly once by the sampler, whichever way the
/// measurement ends.
pub trait RecordSink {
    /// Error returned by the underlying storage.
    type Error: Debug;

    /// Append one record.
    fn write_record(&mut self, record: &Record) -> Result<(), Self::Error>;

    /// Flush and release the storage.
    fn close(&mut self) -> Result<(), Self::Error>;
}

impl<T: RecordSink + ?Sized> RecordSink for &mut T {
    type Error = T::Error;

    fn write_record(&mut self, record: &Record) -> Result<(), Self::Error> {
        (**self).write_record(record)
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }
}

/// CSV lines written to any `core::fmt::Write`, such as a UART console.
#[derive(Debug)]
pub struct CsvWriter<W: Write> {
    out: W,
    closed: bool,
}

impl<W: Write> CsvWriter<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out, closed: false }
    }

    /// Whether `close` has run.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for CsvWriter<W> {
    type Error = fmt::Error;

    fn write_record(&mut self, record: &Record) -> Result<(), Self::Error> {
        if self.closed {
            return Err(fmt::Error);
        }
        writeln!(self.out, "{}", record)
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(feature = "std")]
impl RecordSink for std::vec::Vec<Record> {
    type Error = core::convert::Infallible;

    fn write_record(&mut self, record: &Record) -> Result<(), Self::Error> {
        self.push(*record);
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_line_format() {
        let mut line: heapless::String<32> = heapless::String::new();
        write!(line, "{}", Record::new(500, 2048)).unwrap();
        assert_eq!(line.as_str(), "500,2048");
    }

    #[test]
    fn test_parse_accepts_newline() {
        assert_eq!(Record::parse("1000,17\n"), Some(Record::new(1000, 17)));
        assert_eq!(Record::parse("0, 4095\r\n"), Some(Record::new(0, 4095)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Record::parse(""), None);
        assert_eq!(Record::parse("12"), None);
        assert_eq!(Record::parse("a,b"), None);
        assert_eq!(Record::parse("-5,10"), None);
        assert_eq!(Record::parse("5,70000"), None);
    }

    #[test]
    fn test_csv_writer_refuses_after_close() {
        let mut sink = CsvWriter::new(heapless::String::<64>::new());
        sink.write_record(&Record::new(0, 1)).unwrap();
        sink.write_record(&Record::new(500, 2)).unwrap();
        sink.close().unwrap();
        assert!(sink.write_record(&Record::new(1000, 3)).is_err());
        assert_eq!(sink.into_inner().as_str(), "0,1\n500,2\n");
    }
}
