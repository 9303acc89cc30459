use defmt::{error, info};
use embassy_executor::task;
use embassy_rp::gpio::Output;
use embassy_time::Delay;

use pwrkeeper::{CheckOutcome, Sampler};

use super::gpio_input::PowerSense;
use super::tick::TICK_SIGNAL;

pub type PowerButtonSampler = Sampler<'static, PowerSense, Output<'static>>;

#[task]
pub async fn power_button_task(mut sampler: PowerButtonSampler) {
    info!("Power button task started");

    let mut delay = Delay;

    loop {
        TICK_SIGNAL.wait().await;

        match sampler.step(&mut delay).await {
            Ok(CheckOutcome::Waiting) => {}
            Ok(CheckOutcome::Skipped) => {
                info!("Sample window elapsed with power sense low, not pressing");
            }
            Ok(CheckOutcome::Pressed) => {
                info!("Sample window elapsed with power sense high, pressed power button");
            }
            Err(e) => error!("Sampler error: {}", e),
        }
    }
}
