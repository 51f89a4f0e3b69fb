//! The clock capability and the production system clock.

use chrono::Utc;
use chrono_tz::Tz;

use crate::date::Date;
use crate::instant::Instant;

/// Read-only access to the current time.
///
/// Application code depends on this capability instead of reading system
/// time directly, so tests can substitute fixed or scripted time sources.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;

    /// Returns the current calendar day, in the clock's zone.
    fn today(&self) -> Date {
        Date::from_instant(&self.now())
    }
}

/// Supplies a clock to code that resolves its time source late.
pub trait ClockProvider {
    /// Returns the clock to read time from.
    fn clock(&self) -> &dyn Clock;
}

/// Production clock that reads the host system time in a configured zone.
///
/// Every `now()` call reads the host clock afresh; nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    zone: Tz,
}

impl SystemClock {
    /// Creates a system clock reporting time in `zone`.
    #[must_use]
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Creates a system clock reporting time in UTC.
    #[must_use]
    pub fn utc() -> Self {
        Self::new(Tz::UTC)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Utc::now().with_timezone(&self.zone)
    }
}
