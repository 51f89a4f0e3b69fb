//! The [`Instant`] alias and helpers for building instants from strings.
//!
//! An instant is a precise point in time carrying an IANA time zone. It is
//! chrono's `DateTime` pinned to `chrono_tz::Tz` so that zone identifiers
//! survive serialization round trips.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::InstantError;

/// A point in time with sub-second precision and an associated time zone.
pub type Instant = DateTime<Tz>;

/// Wall-clock format with microsecond precision, e.g. `2018-04-07 16:51:29.083869`.
pub const MICROSECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Builds an [`Instant`] from a formatted zone-local wall-clock string.
///
/// Ambiguous local times (DST fall-back) resolve to the earliest mapping.
///
/// # Errors
///
/// Returns [`InstantError::UnmatchedFormat`] if `value` does not match
/// `format`, and [`InstantError::NonexistentLocalTime`] if the wall-clock
/// time was skipped by a DST transition in `zone`.
pub fn from_format(format: &str, value: &str, zone: Tz) -> Result<Instant, InstantError> {
    let naive =
        NaiveDateTime::parse_from_str(value, format).map_err(|_| InstantError::UnmatchedFormat {
            format: format.to_owned(),
            value: value.to_owned(),
        })?;

    resolve_local(naive, zone)
}

/// Maps a naive wall-clock time into `zone`, taking the earliest mapping
/// when the time is ambiguous.
pub(crate) fn resolve_local(naive: NaiveDateTime, zone: Tz) -> Result<Instant, InstantError> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(InstantError::NonexistentLocalTime {
            value: naive.format(MICROSECONDS_FORMAT).to_string(),
            zone: zone.name().to_owned(),
        }),
    }
}
