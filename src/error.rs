//! Errors raised by the monitor's physical lines.
//!
//! Each variant names the line that failed and carries the
//! [`ErrorKind`] reported by its pin driver. On the RP2040 all pin
//! operations are infallible, so these only surface with other HALs.

use core::fmt;

use embedded_hal::digital::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Reading the sensed-power input failed.
    Sense(ErrorKind),
    /// Driving the status indicator failed.
    Indicator(ErrorKind),
    /// Driving the button output failed.
    Button(ErrorKind),
}

impl Error {
    pub(crate) fn sense<E: embedded_hal::digital::Error>(e: E) -> Self {
        Self::Sense(e.kind())
    }

    pub(crate) fn indicator<E: embedded_hal::digital::Error>(e: E) -> Self {
        Self::Indicator(e.kind())
    }

    pub(crate) fn button<E: embedded_hal::digital::Error>(e: E) -> Self {
        Self::Button(e.kind())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sense(kind) => write!(f, "sense input: {kind}"),
            Self::Indicator(kind) => write!(f, "status indicator: {kind}"),
            Self::Button(kind) => write!(f, "button output: {kind}"),
        }
    }
}
