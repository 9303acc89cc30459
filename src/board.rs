//! RP2040 bindings for the hardware-independent core.

use embassy_rp::watchdog::Watchdog;

use crate::tick_handler::WatchdogFeed;

impl WatchdogFeed for Watchdog {
    fn feed(&mut self) {
        Watchdog::feed(self);
    }
}
