//! Weekday rules.

use almanac_core::constants::SATURDAY;

use super::{Predicate, weekday_arg};
use crate::error::TemporalResult;
use crate::timestamp::Timestamp;

/// Matches one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayInWeek {
    weekday: u8,
}

impl DayInWeek {
    /// ## Errors
    /// Returns a `Core` invalid-argument error if `weekday` is not in `0..=6`.
    pub fn new(weekday: impl Into<u8>) -> TemporalResult<Self> {
        Ok(Self {
            weekday: weekday_arg(weekday.into())?,
        })
    }

    #[must_use]
    pub const fn weekday(&self) -> u8 {
        self.weekday
    }
}

impl Predicate for DayInWeek {
    fn includes(&self, at: &Timestamp) -> bool {
        at.weekday() == self.weekday
    }
}

/// ## Summary
/// Matches a span of weekdays, wrapping through Saturday when the start
/// comes after the end.
///
/// Equal bounds match every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeInWeek {
    start: u8,
    end: u8,
}

impl RangeInWeek {
    /// ## Errors
    /// Returns a `Core` invalid-argument error if either bound is not in `0..=6`.
    pub fn new(start: impl Into<u8>, end: impl Into<u8>) -> TemporalResult<Self> {
        Ok(Self {
            start: weekday_arg(start.into())?,
            end: weekday_arg(end.into())?,
        })
    }

    /// Range from `start` through Saturday.
    ///
    /// ## Errors
    /// Returns a `Core` invalid-argument error if `start` is not in `0..=6`.
    pub fn from_day(start: impl Into<u8>) -> TemporalResult<Self> {
        Self::new(start, SATURDAY)
    }
}

impl Predicate for RangeInWeek {
    fn includes(&self, at: &Timestamp) -> bool {
        let day = at.weekday();
        match self.start.cmp(&self.end) {
            std::cmp::Ordering::Equal => true,
            std::cmp::Ordering::Less => (self.start..=self.end).contains(&day),
            std::cmp::Ordering::Greater => day >= self.start || day <= self.end,
        }
    }
}
