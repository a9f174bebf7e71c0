//! Arm/disarm tick interval driven by the host event loop.
//!
//! The loop asks the controller for its desired period after every stimulus
//! and hands it to [`TickInterval::set_period`]. `None` disarms: no tick is
//! reported after that call until the interval is armed again.

use std::time::{Duration, Instant};

/// Reports when a tick is due while armed.
#[derive(Debug, Clone, Default)]
pub struct TickInterval {
    period: Option<Duration>,
    deadline: Option<Instant>,
}

impl TickInterval {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            period: None,
            deadline: None,
        }
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm with `period`, or disarm with `None`.
    ///
    /// Passing the period already in effect keeps the current deadline, so
    /// calling this after every stimulus does not delay the next tick.
    pub fn set_period(&mut self, period: Option<Duration>, now: Instant) {
        if period == self.period {
            return;
        }
        self.period = period;
        self.deadline = period.map(|p| now + p);
    }

    /// Whether a tick is due at `now`. Reports at most one tick per call
    /// and moves the deadline forward by one period when it does.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        match (self.period, self.deadline) {
            (Some(period), Some(deadline)) if now >= deadline => {
                self.deadline = Some(deadline + period);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or `None` while disarmed.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
