//! Deterministic and scriptable clocks for tests.
//!
//! Production code reads time through `clockbox_core::clock::Clock`; the
//! implementations here let test harnesses freeze time ([`FixedClock`]),
//! let it advance from a chosen anchor ([`TickingClock`]), or share one
//! frozen time across process restarts ([`PersistedClock`]). Mutation goes
//! through the separate [`MutableClock`] capability so production code can
//! keep depending on the read-only one.

mod assert;
mod error;
mod fixed;
mod mutable;
mod persisted;
mod storage;
mod ticking;

pub use assert::assert_instant_within_one_second_after;
pub use error::ClockError;
pub use fixed::FixedClock;
pub use mutable::MutableClock;
pub use persisted::{PersistedClock, SERIALIZATION_FORMAT};
pub use storage::{
    ChannelFileNameResolver, FileNameResolver, FixedFileNameResolver, TEST_CHANNEL_ENV,
};
pub use ticking::TickingClock;
