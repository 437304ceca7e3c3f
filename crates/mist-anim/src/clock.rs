//! Fixed-interval tick clock.
//!
//! The manager does not own a thread or a timer. A host frame loop feeds
//! elapsed wall time into the clock and the clock reports how many whole
//! ticks have come due while it is running. Stopping the clock drops any
//! partially accumulated interval.

use std::time::Duration;

/// Default interval between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(5);

/// Smallest interval the clock accepts.
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, PartialEq)]
pub struct TickClock {
    interval: Duration,
    enabled: bool,
    accumulated: Duration,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl TickClock {
    /// Create a stopped clock ticking every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_TICK_INTERVAL),
            enabled: false,
            accumulated: Duration::ZERO,
        }
    }

    /// Enable ticking. Starting a running clock keeps its phase.
    pub fn start(&mut self) {
        self.enabled = true;
    }

    /// Disable ticking and discard the partial interval.
    pub fn stop(&mut self) {
        self.enabled = false;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.enabled
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the tick interval. Zero is raised to one millisecond.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(MIN_TICK_INTERVAL);
    }

    /// Add elapsed time and return how many whole ticks are now due.
    ///
    /// A stopped clock ignores the time and reports zero.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        if !self.enabled {
            return 0;
        }

        self.accumulated += elapsed;
        let due = self.accumulated.as_nanos() / self.interval.as_nanos();
        let due = u32::try_from(due).unwrap_or(u32::MAX);
        self.accumulated -= self.interval * due;
        due
    }
}
