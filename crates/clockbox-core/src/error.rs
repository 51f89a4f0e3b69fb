//! Error types for dates and instants.
//!
//! Display strings are part of the observable contract; callers and tests
//! match on them, so they must stay stable.

use thiserror::Error;

/// Errors from constructing or transforming a calendar [`Date`](crate::date::Date).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The (year, month, day) triple does not name a real calendar day.
    #[error("Date {year}-{month}-{day} (Y-m-d) is invalid.")]
    InvalidDate {
        /// The rejected year.
        year: i32,
        /// The rejected month.
        month: u32,
        /// The rejected day.
        day: u32,
    },

    /// The input string did not match the `YYYY-M-D` pattern.
    #[error("Failed to parse string as a Y-m-d formatted date.")]
    UnparseableDate,

    /// A month addition was requested with a non-positive increment.
    #[error("Months increment must be greater than 0.")]
    NonPositiveMonthsIncrement,

    /// A month subtraction was requested with a non-positive decrement.
    #[error("Months decrement must be greater than 0.")]
    NonPositiveMonthsDecrement,

    /// A variadic selection was called with no dates.
    #[error("At least one date must be provided.")]
    NoDatesProvided,

    /// Date arithmetic left the supported year range.
    #[error("Date arithmetic overflowed the supported year range.")]
    Overflow,
}

/// Errors from building an [`Instant`](crate::instant::Instant) out of
/// zone-local wall-clock fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstantError {
    /// The value string did not match the requested format.
    #[error("Cannot create an instant from format \"{format}\" and value \"{value}\".")]
    UnmatchedFormat {
        /// The strftime-style format that was requested.
        format: String,
        /// The value that failed to parse.
        value: String,
    },

    /// The wall-clock time was skipped by a DST transition in the zone.
    #[error("Local time \"{value}\" does not exist in time zone {zone}.")]
    NonexistentLocalTime {
        /// The zone-local wall-clock time.
        value: String,
        /// The IANA identifier of the zone.
        zone: String,
    },

    /// The calendar date lies outside the range instants can represent.
    #[error("Date {date} is outside the representable instant range.")]
    UnrepresentableDate {
        /// The canonical string form of the date.
        date: String,
    },
}
