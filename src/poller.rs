//! Fixed-interval schedule for sampling the wall clock.
//!
//! The interval is well under a second so every second boundary is seen
//! even when frames arrive late; a tick that finds no change is a no-op.

use std::time::{Duration, Instant};

/// Default sampling interval
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct Poller {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(POLL_INTERVAL)
    }
}

impl Poller {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True when a tick is due at `now`; schedules the next one.
    ///
    /// The first call is always due. Missed intervals are not replayed: after
    /// a long gap a single tick fires and the schedule restarts from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now < due => false,
            _ => {
                self.next_due = Some(now + self.interval);
                true
            }
        }
    }

    /// How long until the next tick is due (zero if overdue).
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due
            .map_or(Duration::ZERO, |due| due.saturating_duration_since(now))
    }
}
