//! Precision-tagged timestamps.
//!
//! ## Summary
//! A [`Timestamp`] pairs a calendar date-time with the [`Precision`] at which
//! it is meaningful. Fields finer than the precision are pinned to their
//! minimum value, so `2004-03 (month)` always carries day 1 and midnight.
//!
//! Comparison between timestamps is asymmetric: when the right-hand side is
//! finer than the left, it is first coerced to the left's precision. This is
//! why [`Timestamp`] exposes [`Timestamp::compare`] instead of implementing
//! `Ord`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use almanac_core::Precision;
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::error::{TemporalError, TemporalResult};

const NANOS_PER_MILLI: u32 = 1_000_000;

/// A date-time tagged with the precision at which it is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    datetime: NaiveDateTime,
    precision: Precision,
}

impl Timestamp {
    /// ## Summary
    /// Builds a timestamp from a date-time, truncating every field finer than
    /// `precision` to its minimum.
    ///
    /// Week precision pins the value to the Monday of its ISO week.
    #[must_use]
    pub fn at(datetime: NaiveDateTime, precision: Precision) -> Self {
        Self {
            datetime: truncate(datetime, precision),
            precision,
        }
    }

    /// Builds a day-precision timestamp from a calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::at(date.and_time(NaiveTime::MIN), Precision::Day)
    }

    /// ## Summary
    /// Year-precision timestamp.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` if the year is outside the supported range.
    pub fn year(year: i32) -> TemporalResult<Self> {
        build(Precision::Year, year, 1, 1, 0, 0, 0, 0)
    }

    /// ## Summary
    /// Month-precision timestamp.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` if the month is not in `1..=12`.
    pub fn month(year: i32, month: u32) -> TemporalResult<Self> {
        build(Precision::Month, year, month, 1, 0, 0, 0, 0)
    }

    /// ## Summary
    /// Week-precision timestamp for the ISO week containing the given date.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` if the date does not exist.
    pub fn week(year: i32, month: u32, day: u32) -> TemporalResult<Self> {
        build(Precision::Week, year, month, day, 0, 0, 0, 0)
    }

    /// ## Summary
    /// Day-precision timestamp.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` if the date does not exist.
    pub fn day(year: i32, month: u32, day: u32) -> TemporalResult<Self> {
        build(Precision::Day, year, month, day, 0, 0, 0, 0)
    }

    /// ## Summary
    /// Hour-precision timestamp.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` if the date or hour is invalid.
    pub fn hour(year: i32, month: u32, day: u32, hour: u32) -> TemporalResult<Self> {
        build(Precision::Hour, year, month, day, hour, 0, 0, 0)
    }

    /// ## Summary
    /// Minute-precision timestamp.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` if the date or time is invalid.
    pub fn minute(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> TemporalResult<Self> {
        build(Precision::Minute, year, month, day, hour, minute, 0, 0)
    }

    /// ## Summary
    /// Second-precision timestamp.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` if the date or time is invalid.
    pub fn second(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> TemporalResult<Self> {
        build(Precision::Second, year, month, day, hour, minute, second, 0)
    }

    /// ## Summary
    /// Millisecond-precision timestamp.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` if the date or time is invalid.
    #[expect(
        clippy::too_many_arguments,
        reason = "one argument per calendar field"
    )]
    pub fn millisecond(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> TemporalResult<Self> {
        build(
            Precision::Millisecond,
            year,
            month,
            day,
            hour,
            minute,
            second,
            milli,
        )
    }

    #[must_use]
    pub const fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    #[must_use]
    pub fn year_number(&self) -> i32 {
        self.datetime.year()
    }

    #[must_use]
    pub fn month_number(&self) -> u32 {
        self.datetime.month()
    }

    #[must_use]
    pub fn day_of_month(&self) -> u32 {
        self.datetime.day()
    }

    #[must_use]
    pub fn hour_of_day(&self) -> u32 {
        self.datetime.hour()
    }

    #[must_use]
    pub fn minute_of_hour(&self) -> u32 {
        self.datetime.minute()
    }

    #[must_use]
    pub fn second_of_minute(&self) -> u32 {
        self.datetime.second()
    }

    #[must_use]
    pub fn millisecond_of_second(&self) -> u32 {
        self.datetime.nanosecond() / NANOS_PER_MILLI
    }

    /// Day of the week, Sunday = 0 through Saturday = 6.
    #[must_use]
    pub fn weekday(&self) -> u8 {
        // num_days_from_sunday is always in 0..=6
        u8::try_from(self.datetime.weekday().num_days_from_sunday()).unwrap_or_default()
    }

    /// Number of days in this timestamp's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year_number(), self.month_number())
    }

    /// Re-expresses this timestamp at another precision.
    #[must_use]
    pub fn coerce(&self, precision: Precision) -> Self {
        Self::at(self.datetime, precision)
    }

    /// ## Summary
    /// Compares `self` against `other`.
    ///
    /// If `other` is strictly finer than `self`, it is coerced to `self`'s
    /// precision first. Otherwise the two are compared as they stand.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        if other.precision.is_finer_than(self.precision) {
            self.datetime.cmp(&other.coerce(self.precision).datetime)
        } else {
            self.datetime.cmp(&other.datetime)
        }
    }

    /// Returns `true` if `other` falls on this timestamp at this timestamp's precision.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// ## Summary
    /// Advances by `n` units of this timestamp's own precision.
    ///
    /// Month steps keep the day pinned to 1. Negative `n` moves backwards.
    /// Returns `None` if the result leaves the representable range.
    #[must_use]
    pub fn checked_add(&self, n: i64) -> Option<Self> {
        let datetime = match self.precision {
            Precision::Year => {
                let year = i32::try_from(i64::from(self.year_number()).checked_add(n)?).ok()?;
                NaiveDate::from_ymd_opt(year, 1, 1)?.and_time(NaiveTime::MIN)
            }
            Precision::Month => {
                let months = Months::new(u32::try_from(n.unsigned_abs()).ok()?);
                if n >= 0 {
                    self.datetime.checked_add_months(months)?
                } else {
                    self.datetime.checked_sub_months(months)?
                }
            }
            Precision::Week => self
                .datetime
                .checked_add_signed(TimeDelta::try_days(n.checked_mul(7)?)?)?,
            Precision::Day => self.datetime.checked_add_signed(TimeDelta::try_days(n)?)?,
            Precision::Hour => self.datetime.checked_add_signed(TimeDelta::try_hours(n)?)?,
            Precision::Minute => self
                .datetime
                .checked_add_signed(TimeDelta::try_minutes(n)?)?,
            Precision::Second => self
                .datetime
                .checked_add_signed(TimeDelta::try_seconds(n)?)?,
            Precision::Millisecond => self
                .datetime
                .checked_add_signed(TimeDelta::try_milliseconds(n)?)?,
        };
        Some(Self::at(datetime, self.precision))
    }

    /// ## Summary
    /// Fallible form of [`Timestamp::checked_add`].
    ///
    /// ## Errors
    /// Returns `Overflow` if the result leaves the representable range.
    pub fn try_add(&self, n: i64) -> TemporalResult<Self> {
        self.checked_add(n).ok_or_else(|| {
            TemporalError::Overflow(format!("{self} + {n} {}", self.precision))
        })
    }

    /// Whole days elapsed from `earlier` to `self`, negative if `earlier` is later.
    #[must_use]
    pub fn days_since(&self, earlier: &Self) -> i64 {
        (*self - *earlier).num_days()
    }

    /// ## Summary
    /// Index of this timestamp on the linear scale of its own precision.
    ///
    /// Consecutive units differ by exactly one: months count from year zero,
    /// weeks count Monday-aligned blocks of days.
    pub(crate) fn unit_index(&self) -> i64 {
        let days = i64::from(self.datetime.date().num_days_from_ce());
        let hours = days * 24 + i64::from(self.hour_of_day());
        let minutes = hours * 60 + i64::from(self.minute_of_hour());
        let seconds = minutes * 60 + i64::from(self.second_of_minute());
        match self.precision {
            Precision::Year => i64::from(self.year_number()),
            Precision::Month => {
                i64::from(self.year_number()) * 12 + i64::from(self.month_number()) - 1
            }
            // 0001-01-01 is day 1 and a Monday
            Precision::Week => (days - 1).div_euclid(7),
            Precision::Day => days,
            Precision::Hour => hours,
            Precision::Minute => minutes,
            Precision::Second => seconds,
            Precision::Millisecond => seconds * 1000 + i64::from(self.millisecond_of_second()),
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::at(datetime, Precision::DEFAULT)
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl Add<i64> for Timestamp {
    type Output = Self;

    /// ## Panics
    /// Panics if the result leaves the representable range. Use
    /// [`Timestamp::checked_add`] to handle that case.
    fn add(self, rhs: i64) -> Self {
        self.checked_add(rhs)
            .unwrap_or_else(|| panic!("timestamp overflow: {self} + {rhs}"))
    }
}

impl Sub<i64> for Timestamp {
    type Output = Self;

    /// ## Panics
    /// Panics if the result leaves the representable range.
    fn sub(self, rhs: i64) -> Self {
        rhs.checked_neg()
            .and_then(|n| self.checked_add(n))
            .unwrap_or_else(|| panic!("timestamp overflow: {self} - {rhs}"))
    }
}

impl Sub for Timestamp {
    type Output = TimeDelta;

    fn sub(self, rhs: Self) -> TimeDelta {
        self.datetime - rhs.datetime
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern = match self.precision {
            Precision::Year => "%Y",
            Precision::Month => "%Y-%m",
            Precision::Week | Precision::Day => "%Y-%m-%d",
            Precision::Hour => "%Y-%m-%dT%H",
            Precision::Minute => "%Y-%m-%dT%H:%M",
            Precision::Second => "%Y-%m-%dT%H:%M:%S",
            Precision::Millisecond => "%Y-%m-%dT%H:%M:%S%.3f",
        };
        write!(f, "{}", self.datetime.format(pattern))
    }
}

/// Gregorian leap-year rule.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `0` for a month outside `1..=12`.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[expect(
    clippy::too_many_arguments,
    reason = "one argument per calendar field"
)]
fn build(
    precision: Precision,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    milli: u32,
) -> TemporalResult<Timestamp> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        TemporalError::InvalidArgument(format!("invalid calendar date {year}-{month}-{day}"))
    })?;
    let time = NaiveTime::from_hms_milli_opt(hour, minute, second, milli).ok_or_else(|| {
        TemporalError::InvalidArgument(format!(
            "invalid time of day {hour}:{minute}:{second}.{milli}"
        ))
    })?;
    Ok(Timestamp::at(date.and_time(time), precision))
}

fn truncate(datetime: NaiveDateTime, precision: Precision) -> NaiveDateTime {
    let date = datetime.date();
    let (h, m, s) = (datetime.hour(), datetime.minute(), datetime.second());
    let date = match precision {
        Precision::Year => date.with_ordinal(1).unwrap_or(date),
        Precision::Month => date.with_day(1).unwrap_or(date),
        Precision::Week => date
            .checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
            .unwrap_or(date),
        _ => date,
    };
    let time = match precision {
        Precision::Year | Precision::Month | Precision::Week | Precision::Day => Some(NaiveTime::MIN),
        Precision::Hour => NaiveTime::from_hms_opt(h, 0, 0),
        Precision::Minute => NaiveTime::from_hms_opt(h, m, 0),
        Precision::Second => NaiveTime::from_hms_opt(h, m, s),
        Precision::Millisecond => {
            NaiveTime::from_hms_milli_opt(h, m, s, datetime.nanosecond() / NANOS_PER_MILLI)
        }
    };
    date.and_time(time.unwrap_or(NaiveTime::MIN))
}
