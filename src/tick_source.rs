//! Reload arithmetic for the periodic tick source.
//!
//! A tick source is a counter clocked at `clock_hz / prescale` that raises an
//! event every `counts` increments. The achieved period follows from those
//! integers and is generally not the requested one, so it is always computed
//! here and reported rather than assumed.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickSource {
    pub clock_hz: u64,
    pub prescale: u32,
    pub counts: u32,
}

impl TickSource {
    /// Pick the reload count closest to `target_us`.
    pub const fn for_period(clock_hz: u64, prescale: u32, target_us: u64) -> Self {
        let scaled = target_us * clock_hz;
        let divisor = prescale as u64 * 1_000_000;
        let counts = (scaled + divisor / 2) / divisor;
        Self {
            clock_hz,
            prescale,
            counts: counts as u32,
        }
    }

    /// Describe an overflow timer of `width_bits` bits preloaded with `preset`
    /// after every expiry.
    pub const fn from_preset(clock_hz: u64, prescale: u32, width_bits: u32, preset: u32) -> Self {
        let span = 1u64 << width_bits;
        Self {
            clock_hz,
            prescale,
            counts: (span - preset as u64) as u32,
        }
    }

    /// Achieved period in microseconds, rounded down.
    pub const fn period_us(&self) -> u64 {
        self.counts as u64 * self.prescale as u64 * 1_000_000 / self.clock_hz
    }

    /// Achieved period in ticks of the underlying clock.
    pub const fn period_ticks(&self) -> u64 {
        self.counts as u64 * self.prescale as u64
    }

    /// Value to load into an overflow timer of `width_bits` bits, or `None` if
    /// the reload count does not fit.
    pub const fn preset(&self, width_bits: u32) -> Option<u32> {
        let span = 1u64 << width_bits;
        if self.counts == 0 || self.counts as u64 > span {
            None
        } else {
            Some((span - self.counts as u64) as u32)
        }
    }
}
