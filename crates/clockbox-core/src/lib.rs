//! Clockbox Core — deterministic time abstractions.
//!
//! This crate defines the calendar [`Date`](date::Date) value type and the
//! [`Clock`](clock::Clock) capability that application code depends on
//! instead of reading system time directly. Production code only ever needs
//! this crate; the mutable clocks used to script time in tests live in
//! `clockbox-test-support`.

pub mod calendar;
pub mod clock;
pub mod date;
pub mod error;
pub mod instant;
