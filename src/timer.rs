use std::time::{Duration, Instant};

/// Fixed-interval tick source with an explicit start/stop lifecycle.
///
/// A stopped ticker never reports a due tick, so the game loop can stop it
/// on game over and on every exit path without racing a late tick.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl Ticker {
    /// Creates a stopped ticker.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    /// Starts (or restarts) the schedule at `now`.
    pub fn start(&mut self, now: Instant) {
        self.last_tick = Some(now);
    }

    pub fn stop(&mut self) {
        self.last_tick = None;
    }

    /// Returns true once per elapsed interval, advancing the schedule.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(last_tick) = self.last_tick else {
            return false;
        };

        if now.saturating_duration_since(last_tick) < self.interval {
            return false;
        }

        self.last_tick = Some(now);
        true
    }

    /// Time left until the next tick; `None` while stopped.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let last_tick = self.last_tick?;
        Some(
            self.interval
                .saturating_sub(now.saturating_duration_since(last_tick)),
        )
    }
}
