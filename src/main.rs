#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::watchdog::Watchdog;
use embassy_time::{Delay, Duration};
use {defmt_rtt as _, panic_probe as _};

use pwrkeeper::config::TICK_PERIOD_US;
use pwrkeeper::{MonitorConfig, SampleCounter, Sampler, StartupConfig, TickHandler, TickSource};

mod config_resources;
mod tasks;

use crate::config_resources::{
    AssignedResources, PowerButtonResources, PowerSenseResources, StatusLedResources,
};

// The tick source: embassy's time driver counts at TICK_HZ with no prescaler.
const TICK_SOURCE: TickSource = TickSource::for_period(embassy_time::TICK_HZ, 1, TICK_PERIOD_US);

static SAMPLE_COUNTER: SampleCounter = SampleCounter::new();

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    unsafe { EXECUTOR_HIGH.on_interrupt() }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let r = split_resources!(p);

    info!("Starting up...");

    let config = MonitorConfig::DEFAULT;
    if let Err(e) = config.validate() {
        panic!("Invalid monitor config: {}", e);
    }

    let mut watchdog = Watchdog::new(p.WATCHDOG);
    if let Some(reason) = watchdog.reset_reason() {
        warn!("Recovered from reset: {:?}", defmt::Debug2Format(&reason));
    }

    let mut status_led = Output::new(r.status_led.pin, Level::Low);
    let power_button = Output::new(r.power_button.pin, Level::Low);
    let power_sense = tasks::gpio_input::init_power_sense(r.power_sense);

    if let Err(e) = pwrkeeper::startup_blink(&mut status_led, &mut Delay, &StartupConfig::DEFAULT).await {
        warn!("Startup sequence failed: {}", e);
    }

    info!(
        "Tick period {} us ({} timer ticks), check every {} ticks, pulse {} ms",
        TICK_SOURCE.period_us(),
        TICK_SOURCE.period_ticks(),
        config.check_threshold_ticks,
        config.pulse_duration_ms
    );

    // Only start the watchdog once the tick task is about to feed it
    watchdog.start(Duration::from_millis(config.watchdog_timeout_ms as u64));

    let handler = TickHandler::new(&SAMPLE_COUNTER, power_sense.clone(), status_led, watchdog);
    let sampler = Sampler::new(&SAMPLE_COUNTER, power_sense, power_button, &config);

    // Tick handler runs at interrupt priority, preempting the foreground sampler
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);

    high_spawner
        .spawn(tasks::tick::tick_task(
            handler,
            Duration::from_ticks(TICK_SOURCE.period_ticks()),
        ))
        .unwrap();

    spawner
        .spawn(tasks::power_button::power_button_task(sampler))
        .unwrap();

    info!("Monitor running");
}
