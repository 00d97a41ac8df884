//! # labkit
//!
//! Peripheral helpers for the microcontroller boards used in lab courses,
//! built on embedded-hal 1.0.
//!
//! ## Features
//!
//! - **Stepper driving**: four-coil half-step sequencing with `OutputPin`/`DelayNs`
//! - **Continuous measurement**: timed ADC sampling into CSV records
//! - **Boolean measurement**: single reading against a threshold
//! - **Disco**: round-robin LED toggling to check the board
//! - **Inline help**: `what("move_stepper")` prints the helper's documentation
//! - **Cooperative cancellation**: every loop polls a [`CancelToken`] and
//!   cleans up (coils low, file closed, LEDs off) before returning
//! - **no_std compatible**: core helpers work without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use labkit::{lab, CancelFlag, Stepper, StepperConfig};
//!
//! static STOP: CancelFlag = CancelFlag::new();
//!
//! let mut stepper = Stepper::new([x2, x1, x3, x4], delay);
//! lab::move_stepper(&mut stepper, &StepperConfig::default().with_steps(-20), &mut console, &STOP)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables CSV files, the system clock, stdout console and TOML loading
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables logging through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

// Core modules
pub mod cancel;
pub mod config;
pub mod console;
pub mod disco;
pub mod error;
pub mod help;
pub mod lab;
pub mod measure;
pub mod stepper;

// Re-exports for ergonomic API
pub use cancel::{CancelFlag, CancelToken, Never};
pub use config::{
    validate_config, DiscoConfig, LabConfig, MeasurementConfig, StepperConfig, ThresholdConfig,
};
pub use disco::{Disco, DiscoReport};
pub use error::{Error, Result};
pub use help::{what, HelpEntry};
pub use measure::{
    boolean_measurement, AnalogInput, Clock, MeasurementOutcome, MeasurementReport, Record,
    RecordSink, Sampler,
};
pub use stepper::{Direction, MoveOutcome, MoveReport, PhaseTable, Stepper};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{Millis, StepsPerSec};
