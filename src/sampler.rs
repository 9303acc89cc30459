//! Foreground sampling state machine.
//!
//! ```text
//!   Idle ──[counter >= threshold]──▶ Checking ──[sensed off]──▶ Idle
//!                                       │
//!                                  [sensed on]
//!                                       ▼
//!              Pulsing(Asserted) ──[pulse elapsed]──▶ Pulsing(Released) ──▶ Idle
//! ```
//!
//! [`Sampler::advance`] takes one edge of this graph. [`Sampler::step`] is one
//! foreground iteration: it advances until the machine is back in `Idle`, so
//! the pulse cannot be re-entered without a fresh `Idle -> Checking` edge.
//! While the pulse delay is pending the foreground is blocked, but the tick
//! handler keeps running and counting.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::config::MonitorConfig;
use crate::counter::SampleCounter;
use crate::error::Error;
use crate::sense::SensedPowerState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulsePhase {
    Asserted,
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SamplerState {
    Idle,
    Checking,
    Pulsing(PulsePhase),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CheckOutcome {
    /// The sample window has not elapsed yet.
    Waiting,
    /// The window elapsed with the computer sensed off; no pulse.
    Skipped,
    /// The window elapsed with the computer sensed on; the button was pulsed.
    Pressed,
}

pub struct Sampler<'a, S, B> {
    counter: &'a SampleCounter,
    sense: S,
    button: B,
    threshold: u8,
    pulse_duration_ms: u32,
    state: SamplerState,
}

impl<'a, S, B> Sampler<'a, S, B>
where
    S: InputPin,
    B: OutputPin,
{
    pub fn new(counter: &'a SampleCounter, sense: S, button: B, config: &MonitorConfig) -> Self {
        Self {
            counter,
            sense,
            button,
            threshold: config.check_threshold_ticks,
            pulse_duration_ms: config.pulse_duration_ms,
            state: SamplerState::Idle,
        }
    }

    pub fn state(&self) -> SamplerState {
        self.state
    }

    /// Take a single transition and return the new state.
    ///
    /// The pulse duration is not waited here: the caller holds the machine in
    /// `Pulsing(Asserted)` for as long as the pulse should last. On error the
    /// machine drops back to `Idle`, releasing the button if it was asserted.
    pub fn advance(&mut self) -> Result<SamplerState, Error> {
        let next = match self.state {
            SamplerState::Idle => {
                if self.counter.take_if_reached(self.threshold) {
                    SamplerState::Checking
                } else {
                    SamplerState::Idle
                }
            }
            SamplerState::Checking => match SensedPowerState::read(&mut self.sense) {
                Ok(SensedPowerState::On) => {
                    if let Err(e) = self.button.set_high() {
                        let _ = self.button.set_low();
                        return self.abort(Error::button(e));
                    }
                    SamplerState::Pulsing(PulsePhase::Asserted)
                }
                Ok(SensedPowerState::Off) => SamplerState::Idle,
                Err(e) => return self.abort(e),
            },
            SamplerState::Pulsing(PulsePhase::Asserted) => {
                if let Err(e) = self.button.set_low() {
                    return self.abort(Error::button(e));
                }
                SamplerState::Pulsing(PulsePhase::Released)
            }
            SamplerState::Pulsing(PulsePhase::Released) => SamplerState::Idle,
        };
        self.state = next;
        Ok(next)
    }

    /// Run one foreground iteration: advance until the machine is back in
    /// `Idle`, holding the pulse for the configured duration.
    pub async fn step<D: DelayNs>(&mut self, delay: &mut D) -> Result<CheckOutcome, Error> {
        let mut outcome = CheckOutcome::Waiting;
        loop {
            match self.advance()? {
                SamplerState::Idle => return Ok(outcome),
                SamplerState::Checking => outcome = CheckOutcome::Skipped,
                SamplerState::Pulsing(PulsePhase::Asserted) => {
                    outcome = CheckOutcome::Pressed;
                    delay.delay_ms(self.pulse_duration_ms).await;
                }
                SamplerState::Pulsing(PulsePhase::Released) => {}
            }
        }
    }

    fn abort(&mut self, e: Error) -> Result<SamplerState, Error> {
        self.state = SamplerState::Idle;
        Err(e)
    }

    pub fn release(self) -> (S, B) {
        (self.sense, self.button)
    }
}
