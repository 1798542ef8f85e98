use std::time::Duration;

use crate::error::ConfigError;

/// Attempts per host when none are given.
pub const DEFAULT_COUNT: u32 = 4;

/// Per-attempt timeout when none is given.
pub const DEFAULT_TIMEOUT_MS: u64 = 2_000;

/// Fixed wait between two consecutive attempts against the same host.
pub const PACING_INTERVAL: Duration = Duration::from_millis(500);

/// TCP port probed by the default reachability check (echo).
pub const DEFAULT_PORT: u16 = 7;

/// Presentation switches for the terminal front-end.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Each level hides more of the per-attempt output.
    pub quiet: u8,
    pub no_color: bool,
}

/// Immutable settings for one probing run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    count: u32,
    timeout: Duration,
    interval: Duration,
}

impl ProbeConfig {
    /// Builds a configuration, rejecting a zero count or timeout.
    pub fn new(count: u32, timeout_ms: u64) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        if timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self {
            count,
            timeout: Duration::from_millis(timeout_ms),
            interval: PACING_INTERVAL,
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            interval: PACING_INTERVAL,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
