//! Temporal expressions.
//!
//! ## Summary
//! An [`Expression`] is a predicate over timestamps. Leaf rules test calendar
//! fields of a single timestamp; unions, intersections and differences
//! combine them. Trees are built with the `|`, `&` and `-` operators:
//!
//! ```
//! use almanac_temporal::{Expression, Timestamp};
//! use almanac_core::constants::{FRIDAY, MONDAY};
//!
//! # fn main() -> Result<(), almanac_temporal::TemporalError> {
//! let workday_mornings =
//!     Expression::range_in_week(MONDAY, FRIDAY)? & Expression::range_in_day(8, 0, 11, 30)?;
//! assert!(workday_mornings.includes(&Timestamp::minute(2004, 5, 4, 9, 15)?));
//! # Ok(())
//! # }
//! ```

mod bound;
mod collection;
mod day;
mod interval;
mod month;
mod occurrences;
mod week;
mod year;

use std::ops::{BitAnd, BitOr, Sub};

use almanac_core::Weekday;

pub use bound::{After, Before};
pub use collection::Collection;
pub use day::RangeInDay;
pub use interval::{DayInterval, EveryInterval, WeekInterval, WeekdayInterval};
pub use month::{DayInMonth, RangeInMonth, WeekInMonth};
pub use occurrences::Occurrences;
pub use week::{DayInWeek, RangeInWeek};
pub use year::{RangeInYear, Year};

use crate::error::{TemporalError, TemporalResult};
use crate::point::Point;
use crate::range::DateRange;
use crate::timestamp::Timestamp;

/// A rule deciding whether a single timestamp matches.
pub trait Predicate {
    fn includes(&self, at: &Timestamp) -> bool;
}

pub(crate) fn weekday_arg(day: u8) -> TemporalResult<u8> {
    Ok(Weekday::try_from(day)?.number())
}

/// A composable predicate over timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Matches when any child matches. Empty matches nothing.
    Union(Collection),
    /// Matches when every child matches. Empty matches nothing.
    Intersect(Collection),
    /// Matches when the first matches and the second does not.
    Diff(Box<Expression>, Box<Expression>),
    /// Matches a single timestamp at its own precision.
    Spec(Timestamp),
    /// Matches points inside a fixed range.
    RangeSpec(DateRange),
    DayInWeek(DayInWeek),
    RangeInWeek(RangeInWeek),
    DayInMonth(DayInMonth),
    WeekInMonth(WeekInMonth),
    RangeInMonth(RangeInMonth),
    RangeInYear(RangeInYear),
    RangeInDay(RangeInDay),
    EveryInterval(EveryInterval),
    DayInterval(DayInterval),
    WeekInterval(WeekInterval),
    WeekdayInterval(WeekdayInterval),
    Year(Year),
    Before(Before),
    After(After),
}

macro_rules! leaf_conversions {
    ($($leaf:ident),* $(,)?) => {
        $(
            impl From<$leaf> for Expression {
                fn from(leaf: $leaf) -> Self {
                    Self::$leaf(leaf)
                }
            }
        )*
    };
}

leaf_conversions!(
    DayInWeek,
    RangeInWeek,
    DayInMonth,
    WeekInMonth,
    RangeInMonth,
    RangeInYear,
    RangeInDay,
    EveryInterval,
    DayInterval,
    WeekInterval,
    WeekdayInterval,
    Year,
    Before,
    After,
);

impl From<Timestamp> for Expression {
    fn from(anchor: Timestamp) -> Self {
        Self::Spec(anchor)
    }
}

impl From<DateRange> for Expression {
    fn from(range: DateRange) -> Self {
        Self::RangeSpec(range)
    }
}

impl Expression {
    #[must_use]
    pub fn union<I: IntoIterator<Item = Self>>(expressions: I) -> Self {
        Self::Union(expressions.into_iter().collect())
    }

    #[must_use]
    pub fn intersect<I: IntoIterator<Item = Self>>(expressions: I) -> Self {
        Self::Intersect(expressions.into_iter().collect())
    }

    #[must_use]
    pub fn diff(first: impl Into<Self>, second: impl Into<Self>) -> Self {
        Self::Diff(Box::new(first.into()), Box::new(second.into()))
    }

    #[must_use]
    pub const fn spec(anchor: Timestamp) -> Self {
        Self::Spec(anchor)
    }

    #[must_use]
    pub const fn range(range: DateRange) -> Self {
        Self::RangeSpec(range)
    }

    /// ## Errors
    /// Returns `InvalidArgument` if `weekday` is not in `0..=6`.
    pub fn day_in_week(weekday: impl Into<u8>) -> TemporalResult<Self> {
        Ok(DayInWeek::new(weekday)?.into())
    }

    /// ## Errors
    /// Returns `InvalidArgument` if either bound is not in `0..=6`.
    pub fn range_in_week(start: impl Into<u8>, end: impl Into<u8>) -> TemporalResult<Self> {
        Ok(RangeInWeek::new(start, end)?.into())
    }

    /// ## Errors
    /// See [`DayInMonth::new`].
    pub fn day_in_month(ordinal: i8, weekday: impl Into<u8>) -> TemporalResult<Self> {
        Ok(DayInMonth::new(ordinal, weekday)?.into())
    }

    /// ## Errors
    /// See [`WeekInMonth::new`].
    pub fn week_in_month(ordinal: i8) -> TemporalResult<Self> {
        Ok(WeekInMonth::new(ordinal)?.into())
    }

    /// ## Errors
    /// See [`RangeInMonth::new`].
    pub fn range_in_month(start_day: u32, end_day: u32) -> TemporalResult<Self> {
        Ok(RangeInMonth::new(start_day, end_day)?.into())
    }

    /// ## Errors
    /// See [`RangeInYear::new`].
    pub fn range_in_year(
        start_month: u32,
        start_day: u32,
        end_month: u32,
        end_day: u32,
    ) -> TemporalResult<Self> {
        Ok(RangeInYear::new(start_month, start_day, end_month, end_day)?.into())
    }

    /// ## Errors
    /// See [`RangeInDay::new`].
    pub fn range_in_day(
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> TemporalResult<Self> {
        Ok(RangeInDay::new(start_hour, start_minute, end_hour, end_minute)?.into())
    }

    /// ## Errors
    /// Returns `InvalidArgument` if `step` is zero.
    pub fn every(anchor: Timestamp, step: u32) -> TemporalResult<Self> {
        Ok(EveryInterval::new(anchor, step)?.into())
    }

    /// ## Errors
    /// Returns `InvalidArgument` if `interval` is zero.
    pub fn day_interval(anchor: Timestamp, interval: u32) -> TemporalResult<Self> {
        Ok(DayInterval::new(anchor, interval)?.into())
    }

    /// ## Errors
    /// Returns `InvalidArgument` if `interval` is zero.
    pub fn week_interval(anchor: Timestamp, interval: u32) -> TemporalResult<Self> {
        Ok(WeekInterval::new(anchor, interval)?.into())
    }

    /// ## Errors
    /// See [`WeekdayInterval::new`].
    pub fn weekday_interval<I>(anchor: Timestamp, interval: u32, weekdays: I) -> TemporalResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<u8>,
    {
        Ok(WeekdayInterval::new(anchor, interval, weekdays)?.into())
    }

    #[must_use]
    pub const fn year(year: i32) -> Self {
        Self::Year(Year::new(year))
    }

    #[must_use]
    pub const fn before(anchor: Timestamp, inclusive: bool) -> Self {
        Self::Before(if inclusive {
            Before::inclusive(anchor)
        } else {
            Before::new(anchor)
        })
    }

    #[must_use]
    pub const fn after(anchor: Timestamp, inclusive: bool) -> Self {
        Self::After(if inclusive {
            After::inclusive(anchor)
        } else {
            After::new(anchor)
        })
    }

    /// Short name of the variant, used in logs and error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Union(_) => "union",
            Self::Intersect(_) => "intersect",
            Self::Diff(..) => "diff",
            Self::Spec(_) => "spec",
            Self::RangeSpec(_) => "range_spec",
            Self::DayInWeek(_) => "day_in_week",
            Self::RangeInWeek(_) => "range_in_week",
            Self::DayInMonth(_) => "day_in_month",
            Self::WeekInMonth(_) => "week_in_month",
            Self::RangeInMonth(_) => "range_in_month",
            Self::RangeInYear(_) => "range_in_year",
            Self::RangeInDay(_) => "range_in_day",
            Self::EveryInterval(_) => "every_interval",
            Self::DayInterval(_) => "day_interval",
            Self::WeekInterval(_) => "week_interval",
            Self::WeekdayInterval(_) => "weekday_interval",
            Self::Year(_) => "year",
            Self::Before(_) => "before",
            Self::After(_) => "after",
        }
    }

    /// Returns `true` if the expression matches `at`.
    #[must_use]
    pub fn includes(&self, at: &Timestamp) -> bool {
        match self {
            Self::Union(children) => children.iter().any(|child| child.includes(at)),
            Self::Intersect(children) => {
                !children.is_empty() && children.iter().all(|child| child.includes(at))
            }
            Self::Diff(first, second) => first.includes(at) && !second.includes(at),
            Self::Spec(anchor) => anchor.matches(at),
            Self::RangeSpec(range) => range.includes(at),
            Self::DayInWeek(rule) => rule.includes(at),
            Self::RangeInWeek(rule) => rule.includes(at),
            Self::DayInMonth(rule) => rule.includes(at),
            Self::WeekInMonth(rule) => rule.includes(at),
            Self::RangeInMonth(rule) => rule.includes(at),
            Self::RangeInYear(rule) => rule.includes(at),
            Self::RangeInDay(rule) => rule.includes(at),
            Self::EveryInterval(rule) => rule.includes(at),
            Self::DayInterval(rule) => rule.includes(at),
            Self::WeekInterval(rule) => rule.includes(at),
            Self::WeekdayInterval(rule) => rule.includes(at),
            Self::Year(rule) => rule.includes(at),
            Self::Before(rule) => rule.includes(at),
            Self::After(rule) => rule.includes(at),
        }
    }

    /// ## Summary
    /// Tests a timestamp or a span.
    ///
    /// Spans are understood by fixed dates, fixed ranges, the open-ended
    /// bounds, and composites of those. A fixed date matches a span that
    /// contains it; a fixed range matches a span lying wholly inside it.
    ///
    /// ## Errors
    /// Returns `TypeMismatch` if a span reaches a rule that only understands
    /// single timestamps.
    pub fn includes_point(&self, point: &Point) -> TemporalResult<bool> {
        match point {
            Point::Instant(at) => Ok(self.includes(at)),
            Point::Span(span) => self.includes_span(span),
        }
    }

    fn includes_span(&self, span: &DateRange) -> TemporalResult<bool> {
        match self {
            Self::Union(children) => {
                for child in children {
                    if child.includes_span(span)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Self::Intersect(children) => {
                if children.is_empty() {
                    return Ok(false);
                }
                for child in children {
                    if !child.includes_span(span)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::Diff(first, second) => {
                Ok(first.includes_span(span)? && !second.includes_span(span)?)
            }
            Self::Spec(anchor) => Ok(span.includes(anchor)),
            Self::RangeSpec(range) => Ok(range.contains(span)),
            Self::Before(rule) => Ok(rule.includes_span(span)),
            Self::After(rule) => Ok(rule.includes_span(span)),
            other => {
                tracing::debug!(kind = other.kind(), span = %span, "Span given to a timestamp rule");
                Err(TemporalError::TypeMismatch(format!(
                    "{} expects a timestamp, got the range {span}",
                    other.kind()
                )))
            }
        }
    }

    /// ## Summary
    /// Lazily enumerates the points of `range` this expression includes.
    ///
    /// The range is stepped at its start's precision. Enumeration stops after
    /// `limit` matches; `0` means no limit.
    #[must_use]
    pub fn dates(&self, range: &DateRange, limit: usize) -> Occurrences<'_> {
        Occurrences::new(self, range.iter(), limit)
    }
}

impl Predicate for Expression {
    fn includes(&self, at: &Timestamp) -> bool {
        Self::includes(self, at)
    }
}

impl BitOr for Expression {
    type Output = Self;

    /// Union, extending `self` in place when it is already a union.
    fn bitor(self, rhs: Self) -> Self {
        match self {
            Self::Union(children) => Self::Union(children.add(rhs)),
            lhs => Self::Union(Collection::new().add(lhs).add(rhs)),
        }
    }
}

impl BitAnd for Expression {
    type Output = Self;

    /// Intersection, extending `self` in place when it is already one.
    fn bitand(self, rhs: Self) -> Self {
        match self {
            Self::Intersect(children) => Self::Intersect(children.add(rhs)),
            lhs => Self::Intersect(Collection::new().add(lhs).add(rhs)),
        }
    }
}

impl Sub for Expression {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::diff(self, rhs)
    }
}
