//! Sensed power state of the monitored computer.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::digital::{ErrorType, InputPin};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensedPowerState {
    /// Input reads logical 1.
    On,
    /// Input reads logical 0.
    Off,
}

impl SensedPowerState {
    pub fn from_level(high: bool) -> Self {
        if high { Self::On } else { Self::Off }
    }

    /// Sample the input line. No filtering or debouncing is applied.
    pub fn read<P: InputPin>(pin: &mut P) -> Result<Self, Error> {
        pin.is_high().map(Self::from_level).map_err(Error::sense)
    }

    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

/// An input pin shared between execution contexts.
///
/// Both the tick handler and the sampler read the sensed-power line. The pin
/// lives in a blocking mutex and every read locks it for the duration of a
/// single `is_high` call.
pub struct SharedInput<'a, M: RawMutex, P> {
    pin: &'a Mutex<M, RefCell<P>>,
}

impl<'a, M: RawMutex, P> SharedInput<'a, M, P> {
    pub fn new(pin: &'a Mutex<M, RefCell<P>>) -> Self {
        Self { pin }
    }
}

impl<M: RawMutex, P> Clone for SharedInput<'_, M, P> {
    fn clone(&self) -> Self {
        Self { pin: self.pin }
    }
}

impl<M: RawMutex, P: ErrorType> ErrorType for SharedInput<'_, M, P> {
    type Error = P::Error;
}

impl<M: RawMutex, P: InputPin> InputPin for SharedInput<'_, M, P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.pin.lock(|pin| pin.borrow_mut().is_high())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.pin.lock(|pin| pin.borrow_mut().is_low())
    }
}
