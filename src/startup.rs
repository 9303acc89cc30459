//! Boot-time indicator sequence.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::StartupConfig;
use crate::error::Error;

/// Pause, then blink the indicator rapidly. Leaves the indicator low.
pub async fn startup_blink<L, D>(led: &mut L, delay: &mut D, config: &StartupConfig) -> Result<(), Error>
where
    L: OutputPin,
    D: DelayNs,
{
    delay.delay_ms(config.initial_delay_ms).await;
    for _ in 0..config.blink_count {
        led.set_high().map_err(Error::indicator)?;
        delay.delay_ms(config.blink_half_period_ms).await;
        led.set_low().map_err(Error::indicator)?;
        delay.delay_ms(config.blink_half_period_ms).await;
    }
    Ok(())
}
