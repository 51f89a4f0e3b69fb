//! The mutation capability for test clocks.

use chrono::TimeDelta;
use clockbox_core::clock::Clock;
use clockbox_core::instant::Instant;

use crate::error::ClockError;

/// A clock whose current time can be scripted.
///
/// Kept separate from [`Clock`] so production code only ever sees the
/// read capability. Mutation expects a single writer; wrap the clock in a
/// mutex if multiple threads need to drive it.
pub trait MutableClock: Clock {
    /// Replaces the clock's current time with `instant`.
    ///
    /// # Errors
    ///
    /// Returns a [`ClockError`] if the clock fails to persist the new
    /// time. In-memory clocks never fail.
    fn change_time_to(&mut self, instant: Instant) -> Result<(), ClockError>;

    /// Moves the clock's current time backwards by `duration`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`MutableClock::change_time_to`].
    fn rewind_time_by(&mut self, duration: TimeDelta) -> Result<(), ClockError> {
        let target = self.now() - duration;

        self.change_time_to(target)
    }

    /// Moves the clock's current time forwards by `duration`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`MutableClock::change_time_to`].
    fn advance_time_by(&mut self, duration: TimeDelta) -> Result<(), ClockError> {
        let target = self.now() + duration;

        self.change_time_to(target)
    }
}
