//! Rules positioned within a month.

use super::{Predicate, weekday_arg};
use crate::error::{TemporalError, TemporalResult};
use crate::timestamp::Timestamp;

/// Week of the month counted from the first day: days 1-7 are week 1.
fn week_from_start(at: &Timestamp) -> u32 {
    (at.day_of_month() - 1) / 7 + 1
}

/// Week of the month counted from the last day: the final seven days are week 1.
fn week_from_end(at: &Timestamp) -> u32 {
    (at.days_in_month() - at.day_of_month()) / 7 + 1
}

fn in_week_of_month(ordinal: i8, at: &Timestamp) -> bool {
    let week = if ordinal > 0 {
        week_from_start(at)
    } else {
        week_from_end(at)
    };
    week == u32::from(ordinal.unsigned_abs())
}

/// ## Summary
/// Matches the nth occurrence of a weekday in a month.
///
/// Positive ordinals count from the start of the month, negative ones from
/// the end, so `(-1, Friday)` is the last Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayInMonth {
    ordinal: i8,
    weekday: u8,
}

impl DayInMonth {
    /// ## Errors
    /// Returns `InvalidArgument` if `ordinal` is zero or outside `-5..=5`, and
    /// a `Core` invalid-argument error if `weekday` is not in `0..=6`.
    pub fn new(ordinal: i8, weekday: impl Into<u8>) -> TemporalResult<Self> {
        if ordinal == 0 || !(-5..=5).contains(&ordinal) {
            return Err(TemporalError::InvalidArgument(format!(
                "week-of-month ordinal must be in -5..=5 and non-zero, got {ordinal}"
            )));
        }
        Ok(Self {
            ordinal,
            weekday: weekday_arg(weekday.into())?,
        })
    }

    #[must_use]
    pub const fn ordinal(&self) -> i8 {
        self.ordinal
    }

    #[must_use]
    pub const fn weekday(&self) -> u8 {
        self.weekday
    }
}

impl Predicate for DayInMonth {
    fn includes(&self, at: &Timestamp) -> bool {
        at.weekday() == self.weekday && in_week_of_month(self.ordinal, at)
    }
}

/// Matches every day of the nth week of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekInMonth {
    ordinal: i8,
}

impl WeekInMonth {
    /// ## Errors
    /// Returns `InvalidArgument` if `ordinal` is zero or outside `-2..=5`.
    pub fn new(ordinal: i8) -> TemporalResult<Self> {
        if ordinal == 0 || !(-2..=5).contains(&ordinal) {
            return Err(TemporalError::InvalidArgument(format!(
                "week-of-month ordinal must be in -2..=5 and non-zero, got {ordinal}"
            )));
        }
        Ok(Self { ordinal })
    }
}

impl Predicate for WeekInMonth {
    fn includes(&self, at: &Timestamp) -> bool {
        in_week_of_month(self.ordinal, at)
    }
}

/// Matches a span of days of the month, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeInMonth {
    start: u32,
    end: u32,
}

impl RangeInMonth {
    /// ## Errors
    /// Returns `InvalidArgument` if a day is outside `1..=31` or `start > end`.
    pub fn new(start: u32, end: u32) -> TemporalResult<Self> {
        if !(1..=31).contains(&start) || !(1..=31).contains(&end) {
            return Err(TemporalError::InvalidArgument(format!(
                "days of the month must be in 1..=31, got {start} and {end}"
            )));
        }
        if start > end {
            return Err(TemporalError::InvalidArgument(format!(
                "start day {start} is after end day {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// A single day of the month.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` if `day` is outside `1..=31`.
    pub fn on(day: u32) -> TemporalResult<Self> {
        Self::new(day, day)
    }
}

impl Predicate for RangeInMonth {
    fn includes(&self, at: &Timestamp) -> bool {
        (self.start..=self.end).contains(&at.day_of_month())
    }
}
