//! Assertion helpers for clocks that track real elapsed time.

use chrono::TimeDelta;
use clockbox_core::instant::Instant;

/// Asserts that `later` falls strictly after `earlier` but by less than one
/// second.
///
/// Ticking clocks drift from their anchor by however long the test has been
/// running; this pins the drift to a bound no reasonable test run exceeds.
///
/// # Panics
///
/// Panics if `later` is not after `earlier`, or is a full second or more
/// after it.
pub fn assert_instant_within_one_second_after(earlier: &Instant, later: &Instant) {
    assert!(
        later > earlier,
        "expected {later} to be strictly after {earlier}"
    );
    assert!(
        *later - *earlier < TimeDelta::seconds(1),
        "expected {later} to be less than one second after {earlier}"
    );
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use chrono_tz::Tz;
    use clockbox_core::instant::{self, Instant};

    use super::assert_instant_within_one_second_after;
    use crate::persisted::SERIALIZATION_FORMAT;

    fn instant(value: &str) -> Instant {
        instant::from_format(SERIALIZATION_FORMAT, value, Tz::UTC).expect("valid test instant")
    }

    #[test]
    fn test_accepts_sub_second_forward_drift() {
        let earlier = instant("2018-04-07T16:51:29.083869");

        assert_instant_within_one_second_after(
            &earlier,
            &(earlier + TimeDelta::microseconds(999_999)),
        );
    }

    #[test]
    #[should_panic(expected = "strictly after")]
    fn test_rejects_equal_instants() {
        let earlier = instant("2018-04-07T16:51:29.083869");

        assert_instant_within_one_second_after(&earlier, &earlier);
    }

    #[test]
    #[should_panic(expected = "less than one second")]
    fn test_rejects_drift_of_a_second_or_more() {
        let earlier = instant("2018-04-07T16:51:29.083869");

        assert_instant_within_one_second_after(&earlier, &(earlier + TimeDelta::seconds(1)));
    }
}
