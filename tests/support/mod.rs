//! Hardware fakes shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, StatefulOutputPin};
use labkit::{AnalogInput, CancelToken};

// =============================================================================
// Coils
// =============================================================================

#[derive(Default)]
struct Coils {
    levels: [bool; 4],
    patterns: Vec<u8>,
    writes: [u32; 4],
    // (coil, first failing write, counted from 1)
    fault: Option<(usize, u32)>,
}

/// Four coil pins sharing one recorder.
///
/// The driver writes coils 0..=3 in order for every pattern, so a pattern
/// is recorded each time coil 3 is written.
#[derive(Clone, Default)]
pub struct CoilBoard {
    coils: Rc<RefCell<Coils>>,
}

impl CoilBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board whose coil `index` rejects its `from_write`-th write and
    /// every later one.
    pub fn with_faulty_coil(index: usize, from_write: u32) -> Self {
        let board = Self::default();
        board.coils.borrow_mut().fault = Some((index, from_write));
        board
    }

    pub fn pins(&self) -> [CoilPin; 4] {
        core::array::from_fn(|index| CoilPin {
            coils: Rc::clone(&self.coils),
            index,
        })
    }

    pub fn levels(&self) -> [bool; 4] {
        self.coils.borrow().levels
    }

    pub fn all_low(&self) -> bool {
        self.levels().iter().all(|level| !level)
    }

    /// Every pattern applied, including the final release.
    pub fn patterns(&self) -> Vec<u8> {
        self.coils.borrow().patterns.clone()
    }
}

pub struct CoilPin {
    coils: Rc<RefCell<Coils>>,
    index: usize,
}

impl CoilPin {
    fn set(&mut self, level: bool) -> Result<(), ErrorKind> {
        let mut coils = self.coils.borrow_mut();
        coils.writes[self.index] += 1;
        if let Some((index, from_write)) = coils.fault {
            if index == self.index && coils.writes[index] >= from_write {
                return Err(ErrorKind::Other);
            }
        }
        coils.levels[self.index] = level;
        if self.index == 3 {
            let pattern = coils
                .levels
                .iter()
                .enumerate()
                .fold(0u8, |acc, (n, &on)| acc | (u8::from(on) << n));
            coils.patterns.push(pattern);
        }
        Ok(())
    }
}

impl ErrorType for CoilPin {
    type Error = ErrorKind;
}

impl OutputPin for CoilPin {
    fn set_low(&mut self) -> Result<(), ErrorKind> {
        self.set(false)
    }

    fn set_high(&mut self) -> Result<(), ErrorKind> {
        self.set(true)
    }
}

// =============================================================================
// LEDs
// =============================================================================

#[derive(Debug, Default)]
pub struct Led {
    pub lit: bool,
    pub toggles: u32,
    /// Every operation fails and the LED keeps its state.
    pub stuck: bool,
}

impl Led {
    pub fn lit() -> Self {
        Self {
            lit: true,
            ..Self::default()
        }
    }

    /// Lit LED that no longer answers.
    pub fn stuck_on() -> Self {
        Self {
            lit: true,
            stuck: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), ErrorKind> {
        if self.stuck {
            Err(ErrorKind::Other)
        } else {
            Ok(())
        }
    }
}

impl ErrorType for Led {
    type Error = ErrorKind;
}

impl OutputPin for Led {
    fn set_low(&mut self) -> Result<(), ErrorKind> {
        self.check()?;
        self.lit = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), ErrorKind> {
        self.check()?;
        self.lit = true;
        Ok(())
    }
}

impl StatefulOutputPin for Led {
    fn is_set_high(&mut self) -> Result<bool, ErrorKind> {
        Ok(self.lit)
    }

    fn is_set_low(&mut self) -> Result<bool, ErrorKind> {
        Ok(!self.lit)
    }

    fn toggle(&mut self) -> Result<(), ErrorKind> {
        self.check()?;
        self.lit = !self.lit;
        self.toggles += 1;
        Ok(())
    }
}

// =============================================================================
// ADC, delay, cancellation
// =============================================================================

/// ADC replaying a fixed list of readings, cycling at the end.
pub struct ScriptedAdc {
    readings: Vec<u16>,
    next: usize,
    pub reads: u32,
}

impl ScriptedAdc {
    pub fn new(readings: &[u16]) -> Self {
        Self {
            readings: readings.to_vec(),
            next: 0,
            reads: 0,
        }
    }
}

impl AnalogInput for ScriptedAdc {
    type Error = Infallible;

    fn read_raw(&mut self) -> Result<u16, Infallible> {
        let value = self.readings[self.next % self.readings.len()];
        self.next += 1;
        self.reads += 1;
        Ok(value)
    }
}

/// ADC whose conversions always fail.
pub struct BrokenAdc;

impl AnalogInput for BrokenAdc {
    type Error = &'static str;

    fn read_raw(&mut self) -> Result<u16, &'static str> {
        Err("conversion timeout")
    }
}

/// Delay that only adds up the requested time.
#[derive(Debug, Default)]
pub struct TallyDelay {
    pub total_ns: u64,
}

impl DelayNs for TallyDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// Token that lets `polls` checks pass, then reports cancellation.
pub struct StopAfter {
    left: Cell<u32>,
}

impl StopAfter {
    pub fn new(polls: u32) -> Self {
        Self {
            left: Cell::new(polls),
        }
    }
}

impl CancelToken for StopAfter {
    fn is_cancelled(&self) -> bool {
        let left = self.left.get();
        self.left.set(left.saturating_sub(1));
        left == 0
    }
}

/// Fresh scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("labkit-it-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}
