//! The calendar [`Date`] value type.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use chrono_tz::Tz;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar;
use crate::error::{DateError, InstantError};
use crate::instant::{self, Instant};

/// An immutable Gregorian calendar day, with no time-of-day component.
///
/// Every constructor and arithmetic operation validates the resulting
/// (year, month, day) triple, so a `Date` value always names a real
/// calendar day. The derived ordering compares fields year-first, which is
/// chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    /// Creates a date from its components.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] if the components do not name a
    /// real calendar day.
    pub fn from_year_month_day(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !calendar::is_valid_date(year, month, day) {
            return Err(DateError::InvalidDate { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// Creates a date from the zone-local calendar fields of an instant.
    #[must_use]
    pub fn from_instant(instant: &Instant) -> Self {
        // The zone-local fields of an instant always name a real day.
        Self {
            year: instant.year(),
            month: instant.month(),
            day: instant.day(),
        }
    }

    /// Parses a date from a `YYYY-M-D` string.
    ///
    /// The year must be exactly four digits, month and day one or two. The
    /// pattern must cover the whole input; trailing or leading garbage is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::UnparseableDate`] if the string does not match
    /// the pattern, and [`DateError::InvalidDate`] if it matches but the
    /// components do not name a real calendar day.
    pub fn from_year_month_day_string(value: &str) -> Result<Self, DateError> {
        let (year, month, day) = parse_components(value).ok_or(DateError::UnparseableDate)?;

        Self::from_year_month_day(year, month, day)
    }

    /// The calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month of the year, `1..=12`.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The day of the month, `1..=31`.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns true if this date falls strictly before `other`.
    #[must_use]
    pub fn is_before(self, other: Self) -> bool {
        self < other
    }

    /// Returns true if this date falls before or on `other`.
    #[must_use]
    pub fn is_before_or_equal_to(self, other: Self) -> bool {
        self <= other
    }

    /// Returns true if this date falls strictly after `other`.
    #[must_use]
    pub fn is_after(self, other: Self) -> bool {
        self > other
    }

    /// Returns true if this date falls after or on `other`.
    #[must_use]
    pub fn is_after_or_equal_to(self, other: Self) -> bool {
        self >= other
    }

    /// Returns true if this date falls within `[start, end]`, both ends
    /// inclusive.
    #[must_use]
    pub fn is_between(self, start: Self, end: Self) -> bool {
        self >= start && self <= end
    }

    /// The next calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Overflow`] if the result leaves the supported
    /// year range.
    pub fn day_after(self) -> Result<Self, DateError> {
        self.offset_by_days(1)
    }

    /// The previous calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Overflow`] if the result leaves the supported
    /// year range.
    pub fn day_before(self) -> Result<Self, DateError> {
        self.offset_by_days(-1)
    }

    /// Shifts this date by a signed number of calendar days.
    ///
    /// A zero offset returns the value unchanged without recomputation.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Overflow`] if the result leaves the supported
    /// year range.
    pub fn offset_by_days(self, days: i64) -> Result<Self, DateError> {
        if days == 0 {
            return Ok(self);
        }

        let shifted = calendar::days_from_civil(self.year, self.month, self.day)
            .checked_add(days)
            .ok_or(DateError::Overflow)?;
        let (year, month, day) = calendar::civil_from_days(shifted);
        let year = i32::try_from(year).map_err(|_| DateError::Overflow)?;

        Self::from_year_month_day(year, month, day)
    }

    /// Shifts this date by a signed number of calendar months.
    ///
    /// The target (year, month) is computed first and the day is then
    /// clamped once against that month's length, so `2019-08-31` offset by
    /// six months is `2020-02-29`, not a per-step compounding of clamps.
    /// A zero offset returns the value unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Overflow`] if the result leaves the supported
    /// year range.
    pub fn offset_by_months(self, months: i32) -> Result<Self, DateError> {
        if months == 0 {
            return Ok(self);
        }

        let total =
            i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(months);
        let year = i32::try_from(total.div_euclid(12)).map_err(|_| DateError::Overflow)?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = (total.rem_euclid(12) + 1) as u32;
        let day = self.day.min(calendar::days_in_month(year, month));

        Self::from_year_month_day(year, month, day)
    }

    /// Shifts this date by a signed number of calendar years, clamping
    /// February 29th to the 28th in non-leap target years.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Overflow`] if the result leaves the supported
    /// year range.
    pub fn offset_by_years(self, years: i32) -> Result<Self, DateError> {
        if years == 0 {
            return Ok(self);
        }

        let year = self.year.checked_add(years).ok_or(DateError::Overflow)?;
        let day = self.day.min(calendar::days_in_month(year, self.month));

        Self::from_year_month_day(year, self.month, day)
    }

    /// Adds at least one month, clamping the day against the target month.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::NonPositiveMonthsIncrement`] if `increment` is
    /// less than one.
    pub fn add_months(self, increment: i32) -> Result<Self, DateError> {
        if increment < 1 {
            return Err(DateError::NonPositiveMonthsIncrement);
        }

        self.offset_by_months(increment)
    }

    /// Subtracts at least one month, clamping the day against the target
    /// month.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::NonPositiveMonthsDecrement`] if `decrement` is
    /// less than one.
    pub fn sub_months(self, decrement: i32) -> Result<Self, DateError> {
        if decrement < 1 {
            return Err(DateError::NonPositiveMonthsDecrement);
        }

        self.offset_by_months(-decrement)
    }

    /// The last day of this date's month.
    #[must_use]
    pub fn end_of_month(self) -> Self {
        Self {
            day: calendar::days_in_month(self.year, self.month),
            ..self
        }
    }

    /// Replaces the day of the month.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] if `day` is not valid for this
    /// date's year and month.
    pub fn with_day(self, day: u32) -> Result<Self, DateError> {
        if day == self.day {
            return Ok(self);
        }

        Self::from_year_month_day(self.year, self.month, day)
    }

    /// The chronologically earliest of the given dates.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::NoDatesProvided`] if `dates` is empty.
    pub fn earliest_of(dates: &[Self]) -> Result<Self, DateError> {
        dates.iter().copied().min().ok_or(DateError::NoDatesProvided)
    }

    /// The chronologically latest of the given dates.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::NoDatesProvided`] if `dates` is empty.
    pub fn latest_of(dates: &[Self]) -> Result<Self, DateError> {
        dates.iter().copied().max().ok_or(DateError::NoDatesProvided)
    }

    /// The instant at `00:00:00.000000` of this day in `zone`.
    ///
    /// # Errors
    ///
    /// Returns an [`InstantError`] if the date is outside the representable
    /// instant range or midnight is skipped by a DST transition in `zone`.
    pub fn start_of_day(self, zone: Tz) -> Result<Instant, InstantError> {
        instant::resolve_local(self.at_micro(0, 0, 0, 0)?, zone)
    }

    /// The instant at `00:00:00.000000` of this day in UTC.
    ///
    /// # Errors
    ///
    /// Returns an [`InstantError`] if the date is outside the representable
    /// instant range.
    pub fn start_of_day_utc(self) -> Result<Instant, InstantError> {
        self.start_of_day(Tz::UTC)
    }

    /// The instant at `23:59:59.999999` of this day in `zone`.
    ///
    /// # Errors
    ///
    /// Returns an [`InstantError`] if the date is outside the representable
    /// instant range or the time is skipped by a DST transition in `zone`.
    pub fn end_of_day(self, zone: Tz) -> Result<Instant, InstantError> {
        instant::resolve_local(self.at_micro(23, 59, 59, 999_999)?, zone)
    }

    /// The instant at `23:59:59.999999` of this day in UTC.
    ///
    /// # Errors
    ///
    /// Returns an [`InstantError`] if the date is outside the representable
    /// instant range.
    pub fn end_of_day_utc(self) -> Result<Instant, InstantError> {
        self.end_of_day(Tz::UTC)
    }

    /// The canonical `YYYY-MM-DD` string form, month and day zero-padded.
    #[must_use]
    pub fn to_year_month_day_string(&self) -> String {
        self.to_string()
    }

    /// The signed span between the start of this day and the start of
    /// `other`, positive when `other` is later.
    #[must_use]
    pub fn diff(self, other: Self) -> TimeDelta {
        TimeDelta::days(self.difference_in_days(other))
    }

    /// The signed number of whole days from this date to `other`.
    #[must_use]
    pub fn difference_in_days(self, other: Self) -> i64 {
        calendar::days_from_civil(other.year, other.month, other.day)
            - calendar::days_from_civil(self.year, self.month, self.day)
    }

    fn at_micro(
        self,
        hour: u32,
        min: u32,
        sec: u32,
        micro: u32,
    ) -> Result<NaiveDateTime, InstantError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| date.and_hms_micro_opt(hour, min, sec, micro))
            .ok_or_else(|| InstantError::UnrepresentableDate {
                date: self.to_string(),
            })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_year_month_day_string(s)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;

        value.parse().map_err(D::Error::custom)
    }
}

/// Splits a strict `YYYY-M-D` string into integer components.
fn parse_components(value: &str) -> Option<(i32, u32, u32)> {
    let mut parts = value.split('-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;

    if parts.next().is_some() {
        return None;
    }

    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    for part in [month, day] {
        if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    Some((year.parse().ok()?, month.parse().ok()?, day.parse().ok()?))
}
