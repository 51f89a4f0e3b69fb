//! A clock frozen at one instant.

use clockbox_core::clock::Clock;
use clockbox_core::instant::Instant;

use crate::error::ClockError;
use crate::mutable::MutableClock;

/// In-memory clock that reports the same instant on every read until it is
/// explicitly changed.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: Instant,
}

impl FixedClock {
    /// Creates a clock frozen at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.now
    }
}

impl MutableClock for FixedClock {
    fn change_time_to(&mut self, instant: Instant) -> Result<(), ClockError> {
        self.now = instant;

        Ok(())
    }
}
