//! Wall-clock source for the round timer
//!
//! The game state never reads the clock. The coordinator asks this anchor how
//! much real time passed since the last tick and feeds that into the state.

use std::time::{Duration, Instant};

/// Cancellable anchor for measuring elapsed time between ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundClock {
    last: Option<Instant>,
}

impl RoundClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start measuring from `now`
    pub fn start(&mut self, now: Instant) {
        self.last = Some(now);
    }

    /// Stop measuring; later calls to `elapsed` report nothing until restarted
    pub fn stop(&mut self) {
        self.last = None;
    }

    pub fn is_running(&self) -> bool {
        self.last.is_some()
    }

    /// Time since the previous call (or `start`), moving the anchor to `now`
    pub fn elapsed(&mut self, now: Instant) -> Option<Duration> {
        let last = self.last?;
        self.last = Some(now);
        Some(now.saturating_duration_since(last))
    }
}
