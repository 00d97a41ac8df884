//! Error types for labkit.
//!
//! Provides unified error handling across configuration, hardware access and
//! result storage. User cancellation is never an error: the loops report it
//! through their outcome types instead.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all labkit operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Pin, ADC or LED operation error
    Hardware(HardwareError),
    /// Results file error
    Storage(StorageError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Stepper speed must be at least 1 step per second
    InvalidSpeed(u32),
    /// Sampling interval must be at least 1 ms
    InvalidInterval(u32),
    /// LED cycling period must be at least 1 ms
    InvalidPeriod(u32),
    /// Pin name is empty or unusable in a file name
    InvalidPinName(heapless::String<32>),
    /// Generated name does not fit its buffer
    NameTooLong,
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Hardware collaborator errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareError {
    /// Digital output operation failed
    Pin,
    /// Analog read failed
    Adc,
    /// LED operation failed
    Led,
}

/// Results storage errors.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Results file could not be created
    Open(heapless::String<128>),
    /// Writing a record failed
    Write,
    /// Flushing or closing the file failed
    Close,
    /// Results file could not be read back
    Read(heapless::String<128>),
    /// Line of a results file is not `<elapsed>,<reading>`
    Malformed {
        /// One-based line number
        line: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Hardware(e) => write!(f, "Hardware error: {}", e),
            Error::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidSpeed(v) => write!(f, "Invalid speed: {}. Must be > 0 steps/s", v),
            ConfigError::InvalidInterval(v) => {
                write!(f, "Invalid measurement interval: {} ms. Must be > 0", v)
            }
            ConfigError::InvalidPeriod(v) => write!(f, "Invalid LED period: {} ms. Must be > 0", v),
            ConfigError::InvalidPinName(name) => write!(f, "Invalid pin name: '{}'", name),
            ConfigError::NameTooLong => write!(f, "Generated name too long"),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareError::Pin => write!(f, "GPIO pin operation failed"),
            HardwareError::Adc => write!(f, "ADC read failed"),
            HardwareError::Led => write!(f, "LED operation failed"),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Open(msg) => write!(f, "Cannot open results file: {}", msg),
            StorageError::Write => write!(f, "Failed to write record"),
            StorageError::Close => write!(f, "Failed to close results file"),
            StorageError::Read(msg) => write!(f, "Cannot read results file: {}", msg),
            StorageError::Malformed { line } => write!(f, "Malformed record on line {}", line),
        }
    }
}

/// Copy `text` into a fixed-capacity message, cut at a character boundary
/// when it does not fit.
pub(crate) fn message<const N: usize>(text: &str) -> heapless::String<N> {
    let mut end = text.len().min(N);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    heapless::String::try_from(&text[..end]).unwrap_or_default()
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Error::Hardware(e)
    }
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Error::Storage(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for HardwareError {}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}
