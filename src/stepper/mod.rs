//! Stepper module for labkit.
//!
//! Drives a four-coil stepper through a fixed phase table.

mod driver;
mod phase;

pub use driver::{MoveOutcome, MoveReport, Stepper};
pub use phase::{Direction, PhaseTable};
