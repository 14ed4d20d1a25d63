//! Periodic rules anchored at a starting timestamp.

use almanac_core::Precision;
use chrono::{Datelike, Days, NaiveDate};

use super::{Predicate, weekday_arg};
use crate::error::{TemporalError, TemporalResult};
use crate::timestamp::Timestamp;

fn positive(value: u32, what: &str) -> TemporalResult<u32> {
    if value == 0 {
        return Err(TemporalError::InvalidArgument(format!(
            "{what} must be greater than zero"
        )));
    }
    Ok(value)
}

/// ## Summary
/// Matches every `step`th unit of `precision` on or after the anchor.
///
/// The point is coerced to the rule's precision and its distance from the
/// anchor, counted in whole units, must be a non-negative multiple of the
/// step. Months and years count calendar units, so this holds for irregular
/// lengths as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EveryInterval {
    anchor: Timestamp,
    step: u32,
    precision: Precision,
}

impl EveryInterval {
    /// Steps at the anchor's own precision.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` if `step` is zero.
    pub fn new(anchor: Timestamp, step: u32) -> TemporalResult<Self> {
        Self::with_precision(anchor, step, anchor.precision())
    }

    /// ## Errors
    /// Returns `InvalidArgument` if `step` is zero.
    pub fn with_precision(anchor: Timestamp, step: u32, precision: Precision) -> TemporalResult<Self> {
        Ok(Self {
            anchor: anchor.coerce(precision),
            step: positive(step, "step")?,
            precision,
        })
    }
}

impl Predicate for EveryInterval {
    fn includes(&self, at: &Timestamp) -> bool {
        let distance = at.coerce(self.precision).unit_index() - self.anchor.unit_index();
        distance >= 0 && distance % i64::from(self.step) == 0
    }
}

/// ## Summary
/// Matches every `interval`th day counted from the anchor's date.
///
/// Days before the anchor that fall on the same cadence match as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayInterval {
    anchor: Timestamp,
    interval: u32,
}

impl DayInterval {
    /// ## Errors
    /// Returns `InvalidArgument` if `interval` is zero.
    pub fn new(anchor: Timestamp, interval: u32) -> TemporalResult<Self> {
        Ok(Self {
            anchor: anchor.coerce(Precision::Day),
            interval: positive(interval, "day interval")?,
        })
    }
}

impl Predicate for DayInterval {
    fn includes(&self, at: &Timestamp) -> bool {
        at.coerce(Precision::Day)
            .days_since(&self.anchor)
            .rem_euclid(i64::from(self.interval))
            == 0
    }
}

/// Week of the year where weeks start on Sunday and days before the first
/// Sunday are week 0.
fn sunday_week_number(date: NaiveDate) -> i64 {
    i64::from((date.ordinal0() + 7 - date.weekday().num_days_from_sunday()) / 7)
}

fn last_week_number(year: i32) -> i64 {
    NaiveDate::from_ymd_opt(year, 12, 31).map_or(0, sunday_week_number)
}

/// ## Summary
/// Matches every day of every `interval`th Sunday-started week, counted from
/// the week containing the anchor.
///
/// Days before that week never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekInterval {
    base: NaiveDate,
    interval: u32,
}

impl WeekInterval {
    /// ## Errors
    /// Returns `InvalidArgument` if `interval` is zero.
    pub fn new(anchor: Timestamp, interval: u32) -> TemporalResult<Self> {
        let date = anchor.date();
        let back = Days::new(u64::from(date.weekday().num_days_from_sunday()));
        Ok(Self {
            base: date.checked_sub_days(back).unwrap_or(date),
            interval: positive(interval, "week interval")?,
        })
    }

    /// The Sunday starting the anchor's week.
    #[must_use]
    pub const fn base(&self) -> NaiveDate {
        self.base
    }
}

impl Predicate for WeekInterval {
    fn includes(&self, at: &Timestamp) -> bool {
        let date = at.date();
        if date < self.base {
            return false;
        }
        // Continue the week count across year boundaries
        let week = sunday_week_number(date)
            + (self.base.year()..date.year())
                .map(last_week_number)
                .sum::<i64>();
        (week - sunday_week_number(self.base)) % i64::from(self.interval) == 0
    }
}

/// Matches chosen weekdays inside every `interval`th week from the anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeekdayInterval {
    weeks: WeekInterval,
    weekdays: Vec<u8>,
}

impl WeekdayInterval {
    /// ## Errors
    /// Returns `InvalidArgument` if `interval` is outside `2..=10` or no
    /// weekdays are given, and a `Core` invalid-argument error if a weekday
    /// is not in `0..=6`.
    pub fn new<I>(anchor: Timestamp, interval: u32, weekdays: I) -> TemporalResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<u8>,
    {
        if !(2..=10).contains(&interval) {
            return Err(TemporalError::InvalidArgument(format!(
                "weekday interval must be in 2..=10, got {interval}"
            )));
        }
        let weekdays = weekdays
            .into_iter()
            .map(|day| weekday_arg(day.into()))
            .collect::<TemporalResult<Vec<_>>>()?;
        if weekdays.is_empty() {
            return Err(TemporalError::InvalidArgument(
                "at least one weekday is required".to_string(),
            ));
        }
        Ok(Self {
            weeks: WeekInterval::new(anchor, interval)?,
            weekdays,
        })
    }
}

impl Predicate for WeekdayInterval {
    fn includes(&self, at: &Timestamp) -> bool {
        self.weekdays.contains(&at.weekday()) && self.weeks.includes(at)
    }
}
