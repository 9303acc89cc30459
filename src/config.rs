// Nominal tick period of the periodic tick source.
pub const TICK_PERIOD_US: u64 = 500_000; // us

// Number of ticks in one sample window. At the nominal tick period this is
// one power state check every 30 seconds.
pub const CHECK_THRESHOLD_TICKS: u8 = 60;

// How long the button output is held asserted to emulate a manual press.
pub const PULSE_DURATION_MS: u32 = 250; // ms

// Hardware watchdog timeout. The tick handler feeds the watchdog on every tick,
// so a stalled tick source resets the device after this long.
pub const WATCHDOG_TIMEOUT_MS: u32 = 2_100; // ms

// Startup indicator sequence: a pause, then a burst of rapid blinks.
pub const STARTUP_DELAY_MS: u32 = 1_000; // ms
pub const STARTUP_BLINK_COUNT: u8 = 10;
pub const STARTUP_BLINK_HALF_PERIOD_MS: u32 = 50; // ms

/// Timing parameters of the power monitor.
///
/// The sampling logic only sees these values, never a hardware clock, so the
/// same state machine runs unchanged on timers of different resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorConfig {
    pub tick_period_us: u64,
    pub check_threshold_ticks: u8,
    pub pulse_duration_ms: u32,
    pub watchdog_timeout_ms: u32,
}

impl MonitorConfig {
    pub const DEFAULT: Self = Self {
        tick_period_us: TICK_PERIOD_US,
        check_threshold_ticks: CHECK_THRESHOLD_TICKS,
        pulse_duration_ms: PULSE_DURATION_MS,
        watchdog_timeout_ms: WATCHDOG_TIMEOUT_MS,
    };

    /// Time covered by one sample window at the nominal tick period.
    pub const fn check_interval_us(&self) -> u64 {
        self.tick_period_us * self.check_threshold_ticks as u64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_us == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.check_threshold_ticks == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.pulse_duration_ms as u64 * 1_000 >= self.tick_period_us {
            return Err(ConfigError::PulseTooLong);
        }
        if self.watchdog_timeout_ms as u64 * 1_000 <= self.tick_period_us {
            return Err(ConfigError::WatchdogTooShort);
        }
        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    ZeroTickPeriod,
    ZeroThreshold,
    /// The button pulse must finish within one tick period.
    PulseTooLong,
    /// The watchdog must outlast at least one tick period.
    WatchdogTooShort,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroTickPeriod => write!(f, "tick period is zero"),
            Self::ZeroThreshold => write!(f, "check threshold is zero"),
            Self::PulseTooLong => write!(f, "pulse does not fit within one tick"),
            Self::WatchdogTooShort => write!(f, "watchdog timeout shorter than one tick"),
        }
    }
}

/// Cosmetic blink sequence shown once at boot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StartupConfig {
    pub initial_delay_ms: u32,
    pub blink_count: u8,
    pub blink_half_period_ms: u32,
}

impl StartupConfig {
    pub const DEFAULT: Self = Self {
        initial_delay_ms: STARTUP_DELAY_MS,
        blink_count: STARTUP_BLINK_COUNT,
        blink_half_period_ms: STARTUP_BLINK_HALF_PERIOD_MS,
    };
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
