//! Errors raised by mutable and persisted clocks.

use thiserror::Error;

/// Failures while mutating a clock or loading persisted clock state.
///
/// The in-memory clocks never produce these; they exist so the persisted
/// variant can surface storage problems through the shared mutation
/// capability. Display strings for the payload-shape variants are asserted
/// verbatim in tests.
#[derive(Debug, Error)]
pub enum ClockError {
    /// The persisted payload decoded to something other than a JSON object.
    #[error("Expected data to decode to an object, but got {actual}.")]
    UnexpectedPayloadType {
        /// The JSON type that was found.
        actual: &'static str,
    },

    /// The persisted object is missing `timestamp` and/or `timezone`.
    #[error(
        "Expected to decode to an object containing keys timestamp and timezone. Got keys [{keys}]."
    )]
    MissingKeys {
        /// The keys that were found, quoted and comma-separated.
        keys: String,
    },

    /// A required key held a non-string value.
    #[error("Expected key \"{key}\" to contain a string value, but got {actual}.")]
    NonStringValue {
        /// The offending key.
        key: &'static str,
        /// The JSON type that was found.
        actual: &'static str,
    },

    /// The persisted timestamp did not match the serialization format.
    #[error("Cannot create a timestamp from format \"{format}\" and value \"{value}\".")]
    MalformedTimestamp {
        /// The strftime-style format the timestamp must match.
        format: String,
        /// The value that failed to parse.
        value: String,
    },

    /// The persisted zone identifier is not a known IANA zone.
    #[error("Unknown time zone identifier \"{value}\".")]
    UnknownTimeZone {
        /// The unrecognized identifier.
        value: String,
    },

    /// The persisted wall-clock time was skipped by a DST transition.
    #[error("Timestamp \"{value}\" does not exist in time zone {zone}.")]
    NonexistentTimestamp {
        /// The persisted wall-clock time.
        value: String,
        /// The IANA identifier of the zone.
        zone: String,
    },

    /// Reading or writing the storage file failed.
    #[error("failed to access persisted clock state: {0}")]
    Io(#[from] std::io::Error),

    /// The storage file does not hold valid JSON.
    #[error("persisted clock state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
