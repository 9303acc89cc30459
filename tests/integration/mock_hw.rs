//! Mock hardware for host tests.
//!
//! Output pins write into a `PinLog` the test keeps a handle to, so levels
//! can be checked between ticks while the handler and sampler own the pins.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use embedded_hal_async::delay::DelayNs;
use pwrkeeper::{
    CheckOutcome, MonitorConfig, SampleCounter, Sampler, SharedInput, TickHandler, TickReport,
    WatchdogFeed,
};

// ── Sense line ────────────────────────────────────────────────

pub struct MockSense {
    pub high: bool,
}

impl ErrorType for MockSense {
    type Error = Infallible;
}

impl InputPin for MockSense {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high)
    }
}

pub type SenseMutex = Mutex<CriticalSectionRawMutex, RefCell<MockSense>>;
pub type Sense<'a> = SharedInput<'a, CriticalSectionRawMutex, MockSense>;

// ── Output pins ───────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct PinLog {
    pub level: bool,
    pub writes: Vec<bool>,
}

impl PinLog {
    /// Number of low-to-high transitions, starting from low.
    pub fn rising_edges(&self) -> usize {
        let mut previous = false;
        let mut edges = 0;
        for &level in &self.writes {
            if level && !previous {
                edges += 1;
            }
            previous = level;
        }
        edges
    }
}

pub struct MockPin<'a>(pub &'a RefCell<PinLog>);

impl ErrorType for MockPin<'_> {
    type Error = Infallible;
}

impl OutputPin for MockPin<'_> {
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mut log = self.0.borrow_mut();
        log.level = false;
        log.writes.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        let mut log = self.0.borrow_mut();
        log.level = true;
        log.writes.push(true);
        Ok(())
    }
}

impl StatefulOutputPin for MockPin<'_> {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.borrow().level)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.borrow().level)
    }
}

// ── Watchdog ──────────────────────────────────────────────────

/// Watchdog against a simulated clock. It expires once `timeout_ms` passes
/// without a feed.
pub struct SimWatchdog {
    pub now_ms: Cell<u64>,
    pub last_feed_ms: Cell<u64>,
    pub feeds: Cell<u32>,
    pub timeout_ms: u64,
}

impl SimWatchdog {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(0),
            last_feed_ms: Cell::new(0),
            feeds: Cell::new(0),
            timeout_ms,
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }

    pub fn expired(&self) -> bool {
        self.now_ms.get() - self.last_feed_ms.get() > self.timeout_ms
    }
}

pub struct MockWatchdog<'a>(pub &'a SimWatchdog);

impl WatchdogFeed for MockWatchdog<'_> {
    fn feed(&mut self) {
        self.0.last_feed_ms.set(self.0.now_ms.get());
        self.0.feeds.set(self.0.feeds.get() + 1);
    }
}

// ── Delay ─────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockDelay {
    pub waits_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}

// ── Rig ───────────────────────────────────────────────────────

pub type RigTickHandler<'a> = TickHandler<'a, Sense<'a>, MockPin<'a>, MockWatchdog<'a>>;
pub type RigSampler<'a> = Sampler<'a, Sense<'a>, MockPin<'a>>;

/// All state of one power cycle of the device, created at its initial values.
pub struct Rig {
    pub config: MonitorConfig,
    pub counter: SampleCounter,
    pub sense: SenseMutex,
    pub led: RefCell<PinLog>,
    pub button: RefCell<PinLog>,
    pub watchdog: SimWatchdog,
}

impl Rig {
    pub fn new(sensed_on: bool) -> Self {
        let config = MonitorConfig::DEFAULT;
        Self {
            config,
            counter: SampleCounter::new(),
            sense: Mutex::new(RefCell::new(MockSense { high: sensed_on })),
            led: RefCell::new(PinLog::default()),
            button: RefCell::new(PinLog::default()),
            watchdog: SimWatchdog::new(config.watchdog_timeout_ms as u64),
        }
    }

    pub fn set_sensed(&self, on: bool) {
        self.sense.lock(|pin| pin.borrow_mut().high = on);
    }

    pub fn tick_handler(&self) -> RigTickHandler<'_> {
        TickHandler::new(
            &self.counter,
            SharedInput::new(&self.sense),
            MockPin(&self.led),
            MockWatchdog(&self.watchdog),
        )
    }

    pub fn sampler(&self) -> RigSampler<'_> {
        Sampler::new(
            &self.counter,
            SharedInput::new(&self.sense),
            MockPin(&self.button),
            &self.config,
        )
    }

    /// One tick period: advance the clock, run the tick, then let the
    /// foreground take its iteration.
    pub fn tick_then_check(
        &self,
        handler: &mut RigTickHandler<'_>,
        sampler: &mut RigSampler<'_>,
        delay: &mut MockDelay,
    ) -> (TickReport, CheckOutcome) {
        self.watchdog.advance(self.config.tick_period_us / 1_000);
        let report = handler.on_tick().unwrap();
        let outcome = embassy_futures::block_on(sampler.step(delay)).unwrap();
        (report, outcome)
    }
}
