use defmt::{info, trace, warn};
use embassy_executor::task;
use embassy_rp::gpio::Output;
use embassy_rp::watchdog::Watchdog;
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Ticker};

use pwrkeeper::TickHandler;

use super::gpio_input::PowerSense;

pub type StatusTickHandler = TickHandler<'static, PowerSense, Output<'static>, Watchdog>;

/// Raised after every tick to wake the foreground sampler.
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

// Spawned on the interrupt executor so ticks preempt the foreground, including
// while it is holding the power button down.
#[task]
pub async fn tick_task(mut handler: StatusTickHandler, period: Duration) {
    info!("Tick task started, period {} us", period.as_micros());

    // The ticker schedules each deadline from the previous one, so the
    // cadence does not drift with handler run time.
    let mut ticker = Ticker::every(period);

    loop {
        ticker.next().await;

        match handler.on_tick() {
            Ok(report) => trace!("Tick: {:?}, count {}", report.state, report.count),
            Err(e) => warn!("Tick handler error: {}", e),
        }

        TICK_SIGNAL.signal(());
    }
}
