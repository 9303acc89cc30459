//! Tick counter shared between the tick handler and the foreground sampler.
//!
//! The tick handler is the only incrementer. Both sides reset it to zero.
//! Both resets store the same value, so a race between them can at worst
//! restart the sample window early. The threshold check is a plain load
//! followed by a store rather than a compare-and-swap: a tick landing between
//! the two is simply absorbed into the reset.

use portable_atomic::{AtomicU8, Ordering};

pub struct SampleCounter {
    ticks: AtomicU8,
}

impl SampleCounter {
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU8::new(0),
        }
    }

    /// Count one tick and return the new value. Wraps at `u8::MAX`; the
    /// sampler's periodic reset keeps the counter far below that.
    pub fn increment(&self) -> u8 {
        self.ticks.fetch_add(1, Ordering::AcqRel).wrapping_add(1)
    }

    pub fn reset(&self) {
        self.ticks.store(0, Ordering::Release);
    }

    pub fn value(&self) -> u8 {
        self.ticks.load(Ordering::Acquire)
    }

    /// Reset the counter if it has reached `threshold`. Returns whether the
    /// sample window had elapsed.
    pub fn take_if_reached(&self, threshold: u8) -> bool {
        if self.value() >= threshold {
            self.reset();
            true
        } else {
            false
        }
    }
}

impl Default for SampleCounter {
    fn default() -> Self {
        Self::new()
    }
}
