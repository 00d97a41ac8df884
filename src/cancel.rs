//! Cooperative cancellation for the blocking helper loops.
//!
//! Every loop polls its token once per iteration and, once cancelled, runs
//! its cleanup (coils low, file closed, LEDs off) before returning.

use core::sync::atomic::{AtomicBool, Ordering};

/// Source of a user stop request.
pub trait CancelToken {
    /// Whether the current operation should stop.
    fn is_cancelled(&self) -> bool;
}

impl<T: CancelToken + ?Sized> CancelToken for &T {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Token that never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl CancelToken for Never {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Flag that can be raised from an interrupt handler or a Ctrl-C hook.
///
/// Usable as a `static`:
///
/// ```rust
/// use labkit::cancel::{CancelFlag, CancelToken};
///
/// static STOP: CancelFlag = CancelFlag::new();
///
/// STOP.cancel();
/// assert!(STOP.is_cancelled());
/// STOP.reset();
/// assert!(!STOP.is_cancelled());
/// ```
#[derive(Debug, Default)]
pub struct CancelFlag {
    raised: AtomicBool,
}

impl CancelFlag {
    /// Create a lowered flag.
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Raise the flag.
    #[inline]
    pub fn cancel(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Lower the flag so the next helper call runs.
    #[inline]
    pub fn reset(&self) {
        self.raised.store(false, Ordering::Release);
    }
}

impl CancelToken for CancelFlag {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}
