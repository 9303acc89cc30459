//! The reactive step run once per tick of the periodic tick source.
//!
//! Acknowledging and rescheduling the tick belongs to the tick source; by the
//! time [`TickHandler::on_tick`] runs the next deadline is already set. The
//! handler then, in order:
//!
//! 1. feeds the watchdog,
//! 2. counts the tick,
//! 3. toggles the status indicator if the computer reads on, or holds it lit
//!    and restarts the sample window if it reads off.
//!
//! The off-path reset is independent of the sampler's own threshold reset. A
//! computer seen off on the very tick that completes a window therefore
//! cancels that window's check.

use embedded_hal::digital::{InputPin, StatefulOutputPin};

use crate::counter::SampleCounter;
use crate::error::Error;
use crate::sense::SensedPowerState;

/// Liveness signal for an independent hardware watchdog.
pub trait WatchdogFeed {
    fn feed(&mut self);
}

impl<T: WatchdogFeed + ?Sized> WatchdogFeed for &mut T {
    fn feed(&mut self) {
        T::feed(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    pub state: SensedPowerState,
    /// Counter value after this tick.
    pub count: u8,
}

pub struct TickHandler<'a, S, L, W> {
    counter: &'a SampleCounter,
    sense: S,
    indicator: L,
    watchdog: W,
}

impl<'a, S, L, W> TickHandler<'a, S, L, W>
where
    S: InputPin,
    L: StatefulOutputPin,
    W: WatchdogFeed,
{
    pub fn new(counter: &'a SampleCounter, sense: S, indicator: L, watchdog: W) -> Self {
        Self {
            counter,
            sense,
            indicator,
            watchdog,
        }
    }

    pub fn on_tick(&mut self) -> Result<TickReport, Error> {
        self.watchdog.feed();
        self.counter.increment();

        let state = SensedPowerState::read(&mut self.sense)?;
        match state {
            SensedPowerState::On => {
                self.indicator.toggle().map_err(Error::indicator)?;
            }
            SensedPowerState::Off => {
                // Reset before touching the pin so a failing indicator cannot
                // leave a stale window behind.
                self.counter.reset();
                self.indicator.set_high().map_err(Error::indicator)?;
            }
        }

        Ok(TickReport {
            state,
            count: self.counter.value(),
        })
    }

    pub fn release(self) -> (S, L, W) {
        (self.sense, self.indicator, self.watchdog)
    }
}
