//! A mock clock that advances in real time from a chosen anchor.

use chrono::{DateTime, Utc};
use clockbox_core::clock::Clock;
use clockbox_core::instant::Instant;

use crate::error::ClockError;
use crate::mutable::MutableClock;

/// In-memory clock that behaves like a real clock with an offset.
///
/// The clock holds an anchor instant plus the real instant at which the
/// anchor was recorded; every read adds the real elapsed time since that
/// baseline to the anchor, so successive reads are strictly increasing.
#[derive(Debug, Clone, Copy)]
pub struct TickingClock {
    anchor: Instant,
    ticking_from: DateTime<Utc>,
}

impl TickingClock {
    /// Creates a clock that starts ticking from `anchor` right now.
    #[must_use]
    pub fn ticking_from_current_time(anchor: Instant) -> Self {
        Self::ticking_from_time(anchor, Utc::now())
    }

    /// Creates a clock that has been ticking from `anchor` since the real
    /// instant `ticking_from`.
    ///
    /// This rehydrates clock state across in-memory boundaries: a snapshot
    /// taken 24 hours ago keeps the 24 hours of elapsed time instead of
    /// starting to tick from the current time again.
    #[must_use]
    pub fn ticking_from_time(anchor: Instant, ticking_from: DateTime<Utc>) -> Self {
        Self {
            anchor,
            ticking_from,
        }
    }

    /// The real instant the clock started ticking from.
    #[must_use]
    pub fn ticking_from(&self) -> DateTime<Utc> {
        self.ticking_from
    }
}

impl Clock for TickingClock {
    fn now(&self) -> Instant {
        self.anchor + (Utc::now() - self.ticking_from)
    }
}

impl MutableClock for TickingClock {
    fn change_time_to(&mut self, instant: Instant) -> Result<(), ClockError> {
        self.anchor = instant;
        self.ticking_from = Utc::now();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use chrono::{TimeDelta, Utc};
    use chrono_tz::Tz;
    use clockbox_core::clock::Clock;
    use clockbox_core::instant::{self, Instant};

    use super::TickingClock;
    use crate::assert::assert_instant_within_one_second_after;
    use crate::mutable::MutableClock;
    use crate::persisted::SERIALIZATION_FORMAT;

    fn instant(value: &str) -> Instant {
        instant::from_format(SERIALIZATION_FORMAT, value, Tz::UTC).expect("valid test instant")
    }

    #[test]
    fn test_returns_time_that_has_ticked() {
        let anchor = instant("2018-04-07T16:51:29.083869");
        let clock = TickingClock::ticking_from_current_time(anchor);

        assert_instant_within_one_second_after(
            &clock.ticking_from().with_timezone(&Tz::UTC),
            &Utc::now().with_timezone(&Tz::UTC),
        );

        let sample1 = clock.now();
        thread::sleep(Duration::from_micros(50));
        let sample2 = clock.now();
        thread::sleep(Duration::from_micros(50));
        let sample3 = clock.now();

        assert!(sample1 < sample2);
        assert!(sample2 < sample3);

        assert_instant_within_one_second_after(&anchor, &sample1);
        assert_instant_within_one_second_after(&anchor, &sample2);
        assert_instant_within_one_second_after(&anchor, &sample3);
    }

    #[test]
    fn test_changes_the_time_and_resets_the_baseline() {
        let anchor = instant("2021-05-05T14:11:49.128311");
        let mut clock = TickingClock::ticking_from_current_time(anchor);

        let updated = anchor + TimeDelta::minutes(30);
        clock
            .change_time_to(updated)
            .expect("in-memory change cannot fail");

        assert_instant_within_one_second_after(&updated, &clock.now());
        assert_instant_within_one_second_after(
            &clock.ticking_from().with_timezone(&Tz::UTC),
            &Utc::now().with_timezone(&Tz::UTC),
        );
    }

    #[test]
    fn test_provides_the_date_from_its_current_time() {
        let clock = TickingClock::ticking_from_current_time(instant("2018-04-07T16:51:29.083869"));

        let today = clock.today();

        assert_eq!(today.year(), 2018);
        assert_eq!(today.month(), 4);
        assert_eq!(today.day(), 7);
    }

    #[test]
    fn test_advances_the_date_once_it_has_been_ticking_for_24_hours() {
        let clock = TickingClock::ticking_from_time(
            instant("2018-04-07T16:51:29.083869"),
            Utc::now() - TimeDelta::hours(24),
        );

        let today = clock.today();

        assert_eq!(today.year(), 2018);
        assert_eq!(today.month(), 4);
        assert_eq!(today.day(), 8);
    }

    #[test]
    fn test_rewinds_time_from_the_ticking_value() {
        let anchor = instant("2021-05-05T14:11:49.128311");
        let mut clock = TickingClock::ticking_from_current_time(anchor);

        clock
            .rewind_time_by(TimeDelta::minutes(30))
            .expect("in-memory rewind cannot fail");

        assert_instant_within_one_second_after(&(anchor - TimeDelta::minutes(30)), &clock.now());
    }

    #[test]
    fn test_advances_time_from_the_ticking_value() {
        let anchor = instant("2021-05-05T14:11:49.128311");
        let mut clock = TickingClock::ticking_from_current_time(anchor);

        clock
            .advance_time_by(TimeDelta::minutes(30))
            .expect("in-memory advance cannot fail");

        assert_instant_within_one_second_after(&(anchor + TimeDelta::minutes(30)), &clock.now());
    }
}
