//! A fixed clock whose time survives process restarts.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use clockbox_core::clock::Clock;
use clockbox_core::instant::Instant;

use crate::error::ClockError;
use crate::fixed::FixedClock;
use crate::mutable::MutableClock;
use crate::storage::FileNameResolver;

/// Wall-clock serialization format with microsecond precision,
/// e.g. `2018-04-07T16:51:29.083869`.
pub const SERIALIZATION_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// The on-disk record: zone-local wall time plus the IANA zone identifier.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedRecord {
    timestamp: String,
    timezone: String,
}

/// A [`FixedClock`] whose instant is stored on disk so that multiple
/// process invocations observe the same current time.
///
/// Every mutation is flushed to storage synchronously before it returns;
/// nothing is batched or deferred. The storage file is not locked, so one
/// writer per path is assumed; resolvers exist to partition paths per
/// execution stream.
#[derive(Debug)]
pub struct PersistedClock<R> {
    delegate: FixedClock,
    directory: PathBuf,
    resolver: R,
}

impl<R: FileNameResolver> PersistedClock<R> {
    /// Creates a persisted clock frozen at `now` and immediately writes its
    /// state to storage.
    ///
    /// # Errors
    ///
    /// Returns a [`ClockError`] if the state cannot be written.
    pub fn initialize_with(
        directory: impl Into<PathBuf>,
        resolver: R,
        now: Instant,
    ) -> Result<Self, ClockError> {
        let instance = Self {
            delegate: FixedClock::new(now),
            directory: directory.into(),
            resolver,
        };
        instance.persist()?;

        Ok(instance)
    }

    /// Reconstructs a persisted clock from previously stored state.
    ///
    /// # Errors
    ///
    /// Returns a [`ClockError`] if the storage file cannot be read, is not
    /// valid JSON, does not hold an object with string `timestamp` and
    /// `timezone` values, or if those values fail to parse. A failed load
    /// is terminal for that storage path; the caller decides whether to
    /// reinitialize.
    pub fn from_persisted(directory: impl Into<PathBuf>, resolver: R) -> Result<Self, ClockError> {
        let directory = directory.into();
        let path = directory.join(resolver.resolve());
        let now = load(&path)?;
        debug!(path = %path.display(), "loaded persisted clock state");

        Ok(Self {
            delegate: FixedClock::new(now),
            directory,
            resolver,
        })
    }

    fn persist(&self) -> Result<(), ClockError> {
        let now = self.delegate.now();
        let record = PersistedRecord {
            timestamp: now.format(SERIALIZATION_FORMAT).to_string(),
            timezone: now.timezone().name().to_owned(),
        };
        let path = self.storage_path();
        fs::write(&path, serde_json::to_string(&record)?)?;
        debug!(path = %path.display(), timestamp = %record.timestamp, "persisted clock state");

        Ok(())
    }

    fn storage_path(&self) -> PathBuf {
        self.directory.join(self.resolver.resolve())
    }
}

impl<R: FileNameResolver> Clock for PersistedClock<R> {
    fn now(&self) -> Instant {
        self.delegate.now()
    }
}

impl<R: FileNameResolver> MutableClock for PersistedClock<R> {
    fn change_time_to(&mut self, instant: Instant) -> Result<(), ClockError> {
        self.delegate
            .change_time_to(instant)
            .and_then(|()| self.persist())
    }
}

/// Reads and validates a persisted record, returning its instant.
fn load(path: &Path) -> Result<Instant, ClockError> {
    let contents = fs::read_to_string(path)?;
    let decoded: Value = serde_json::from_str(&contents)?;

    let record = match decoded {
        Value::Object(record) => record,
        other => {
            return Err(ClockError::UnexpectedPayloadType {
                actual: json_type_name(&other),
            });
        }
    };

    let (Some(timestamp), Some(timezone)) = (record.get("timestamp"), record.get("timezone"))
    else {
        let keys = record
            .keys()
            .map(|key| format!("\"{key}\""))
            .collect::<Vec<_>>()
            .join(", ");

        return Err(ClockError::MissingKeys { keys });
    };

    let timestamp = expect_string("timestamp", timestamp)?;
    let timezone = expect_string("timezone", timezone)?;

    let naive = NaiveDateTime::parse_from_str(timestamp, SERIALIZATION_FORMAT).map_err(|_| {
        ClockError::MalformedTimestamp {
            format: SERIALIZATION_FORMAT.to_owned(),
            value: timestamp.to_owned(),
        }
    })?;
    let zone: Tz = timezone.parse().map_err(|_| ClockError::UnknownTimeZone {
        value: timezone.to_owned(),
    })?;

    match zone.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(ClockError::NonexistentTimestamp {
            value: timestamp.to_owned(),
            zone: timezone.to_owned(),
        }),
    }
}

fn expect_string<'a>(key: &'static str, value: &'a Value) -> Result<&'a String, ClockError> {
    match value {
        Value::String(value) => Ok(value),
        other => Err(ClockError::NonStringValue {
            key,
            actual: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(number) => {
            if number.is_f64() {
                "float"
            } else {
                "int"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
