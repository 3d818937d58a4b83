//! Cancellable periodic timers.
//!
//! The UI loop never blocks on a timer. Instead each animation owns a
//! [`Ticker`] and polls it with the current instant on every tick event; the
//! ticker reports how many periods elapsed since the last poll. Cancelling a
//! ticker guarantees it never fires again.

use std::time::{Duration, Instant};

/// A periodic scheduled task handle.
///
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
    cancelled: bool,
}

impl Ticker {
    /// Schedule a ticker whose first firing is one period after `now`.
    ///
    pub fn start(period: Duration, now: Instant) -> Self {
        // A zero period would fire unboundedly per poll.
        let period = period.max(Duration::from_millis(1));
        Ticker {
            period,
            next_due: now + period,
            cancelled: false,
        }
    }

    /// Return a ticker that is already cancelled.
    ///
    pub fn idle(period: Duration, now: Instant) -> Self {
        let mut ticker = Ticker::start(period, now);
        ticker.cancel();
        ticker
    }

    /// Return the number of periods that elapsed up to `now` and advance the
    /// schedule past them.
    ///
    pub fn poll(&mut self, now: Instant) -> u32 {
        if self.cancelled || now < self.next_due {
            return 0;
        }
        let overdue = now.duration_since(self.next_due);
        let fired = 1 + (overdue.as_nanos() / self.period.as_nanos()) as u32;
        self.next_due += self.period * fired;
        fired
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

/// A one-shot deadline, used for banners that hide themselves.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn after(delay: Duration, now: Instant) -> Self {
        Deadline { at: now + delay }
    }

    pub fn has_passed(&self, now: Instant) -> bool {
        now >= self.at
    }
}
