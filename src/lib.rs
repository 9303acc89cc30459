//! Power keeper core.
//!
//! Watches a computer's power sense line, mirrors it onto a status indicator
//! and, once every sample window, presses the computer's power button if the
//! sense line reads on. Everything here is written against `embedded-hal`
//! traits so it runs unchanged on the host for testing; the RP2040 wiring
//! lives in the firmware binary.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod counter;
pub mod error;
pub mod sampler;
pub mod sense;
pub mod startup;
pub mod tick_handler;
pub mod tick_source;

#[cfg(feature = "rp2040")]
pub mod board;

pub use config::{MonitorConfig, StartupConfig};
pub use counter::SampleCounter;
pub use error::Error;
pub use sampler::{CheckOutcome, PulsePhase, Sampler, SamplerState};
pub use sense::{SensedPowerState, SharedInput};
pub use startup::startup_blink;
pub use tick_handler::{TickHandler, TickReport, WatchdogFeed};
pub use tick_source::TickSource;
