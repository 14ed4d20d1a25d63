//! Ranges of timestamps.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use chrono::NaiveDate;

use crate::error::TemporalResult;
use crate::timestamp::Timestamp;

/// A range of timestamps, inclusive of its end unless marked exclusive.
///
/// A range whose start is after its end is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Timestamp,
    end: Timestamp,
    exclusive: bool,
}

impl DateRange {
    /// Range from `start` through `end`, both included.
    #[must_use]
    pub const fn new(start: Timestamp, end: Timestamp) -> Self {
        Self {
            start,
            end,
            exclusive: false,
        }
    }

    /// Range from `start` up to but not including `end`.
    #[must_use]
    pub const fn exclusive(start: Timestamp, end: Timestamp) -> Self {
        Self {
            start,
            end,
            exclusive: true,
        }
    }

    /// The canonical empty range, used as the result of [`DateRange::gap`]
    /// for overlapping ranges.
    #[must_use]
    pub fn empty() -> Self {
        let start = NaiveDate::from_ymd_opt(2004, 2, 2).unwrap_or_default();
        let end = NaiveDate::from_ymd_opt(2004, 2, 1).unwrap_or_default();
        Self::new(Timestamp::from_date(start), Timestamp::from_date(end))
    }

    #[must_use]
    pub const fn start(&self) -> Timestamp {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Timestamp {
        self.end
    }

    #[must_use]
    pub const fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    /// Returns `true` if the start is after the end.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start.compare(&self.end) == Ordering::Greater
    }

    /// ## Summary
    /// Returns `true` if `at` lies within the range.
    ///
    /// Each endpoint compares against `at` with its own precision, so a
    /// month-precision start admits any timestamp inside that month.
    #[must_use]
    pub fn includes(&self, at: &Timestamp) -> bool {
        if self.start.compare(at) == Ordering::Greater {
            return false;
        }
        match at.compare(&self.end) {
            Ordering::Less => true,
            Ordering::Equal => !self.exclusive,
            Ordering::Greater => false,
        }
    }

    /// Returns `true` if both endpoints of `other` lie within `self`.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.includes(&other.start) && self.includes(&other.end)
    }

    /// Returns `true` if the ranges share at least one point.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.includes(&other.start) || self.includes(&other.end) || other.contains(self)
    }

    /// ## Summary
    /// Returns the range strictly between `self` and `other`, or
    /// [`DateRange::empty`] if they overlap.
    ///
    /// ## Errors
    /// Returns `Overflow` if stepping past either boundary leaves the
    /// representable range.
    pub fn gap(&self, other: &Self) -> TemporalResult<Self> {
        if self.overlaps(other) {
            return Ok(Self::empty());
        }
        let (lower, higher) = if self.compare_position(other) == Ordering::Greater {
            (other, self)
        } else {
            (self, other)
        };
        Ok(Self::new(lower.end.try_add(1)?, higher.start.try_add(-1)?))
    }

    /// Orders ranges by start, then by end.
    #[must_use]
    pub fn compare_position(&self, other: &Self) -> Ordering {
        match self.start.compare(&other.start) {
            Ordering::Equal => self.end.compare(&other.end),
            ordering => ordering,
        }
    }

    /// Steps through the range at the start's precision.
    #[must_use]
    pub fn iter(&self) -> Steps {
        Steps {
            range: *self,
            next: Some(self.start),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dots = if self.exclusive { "..." } else { ".." };
        write!(f, "{}{dots}{}", self.start, self.end)
    }
}

impl IntoIterator for DateRange {
    type Item = Timestamp;
    type IntoIter = Steps;

    fn into_iter(self) -> Steps {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = Timestamp;
    type IntoIter = Steps;

    fn into_iter(self) -> Steps {
        self.iter()
    }
}

/// Lazy iterator over the timestamps of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Steps {
    range: DateRange,
    next: Option<Timestamp>,
}

impl Iterator for Steps {
    type Item = Timestamp;

    fn next(&mut self) -> Option<Timestamp> {
        let current = self.next.take()?;
        if !self.range.includes(&current) {
            return None;
        }
        self.next = current.checked_add(1);
        Some(current)
    }
}

impl FusedIterator for Steps {}
