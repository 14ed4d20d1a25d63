//! Rules positioned within a year.

use almanac_core::constants::WHOLE_MONTH;

use super::Predicate;
use crate::error::{TemporalError, TemporalResult};
use crate::timestamp::Timestamp;

/// ## Summary
/// Matches a span of the calendar year given as month and day bounds.
///
/// A day of [`WHOLE_MONTH`] leaves that end of the range open to the whole
/// month. Ranges that wrap past December are rejected; build them as the
/// union of two ranges instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeInYear {
    start_month: u32,
    start_day: u32,
    end_month: u32,
    end_day: u32,
}

impl RangeInYear {
    /// ## Errors
    /// Returns `InvalidArgument` if a month is outside `1..=12`, a day is
    /// outside `0..=31`, the start month is after the end month, or the
    /// start day is after the end day within a single month.
    pub fn new(
        start_month: u32,
        start_day: u32,
        end_month: u32,
        end_day: u32,
    ) -> TemporalResult<Self> {
        for month in [start_month, end_month] {
            if !(1..=12).contains(&month) {
                return Err(TemporalError::InvalidArgument(format!(
                    "month must be in 1..=12, got {month}"
                )));
            }
        }
        for day in [start_day, end_day] {
            if day > 31 {
                return Err(TemporalError::InvalidArgument(format!(
                    "day of month must be in 0..=31, got {day}"
                )));
            }
        }
        if start_month > end_month {
            return Err(TemporalError::InvalidArgument(format!(
                "range from month {start_month} to month {end_month} wraps the year end"
            )));
        }
        if start_month == end_month
            && start_day != WHOLE_MONTH
            && end_day != WHOLE_MONTH
            && start_day > end_day
        {
            return Err(TemporalError::InvalidArgument(format!(
                "start day {start_day} is after end day {end_day} in month {start_month}"
            )));
        }
        Ok(Self {
            start_month,
            start_day,
            end_month,
            end_day,
        })
    }

    /// Every day of one month.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` if `month` is outside `1..=12`.
    pub fn month(month: u32) -> TemporalResult<Self> {
        Self::new(month, WHOLE_MONTH, month, WHOLE_MONTH)
    }

    /// Every day from the start of `start_month` through the end of `end_month`.
    ///
    /// ## Errors
    /// See [`RangeInYear::new`].
    pub fn months(start_month: u32, end_month: u32) -> TemporalResult<Self> {
        Self::new(start_month, WHOLE_MONTH, end_month, WHOLE_MONTH)
    }

    /// From a given day of `start_month` through the end of `end_month`.
    ///
    /// ## Errors
    /// See [`RangeInYear::new`].
    pub fn from_day(start_month: u32, start_day: u32, end_month: u32) -> TemporalResult<Self> {
        Self::new(start_month, start_day, end_month, WHOLE_MONTH)
    }
}

impl Predicate for RangeInYear {
    fn includes(&self, at: &Timestamp) -> bool {
        let (month, day) = (at.month_number(), at.day_of_month());
        if self.start_month == self.end_month
            && self.start_day != WHOLE_MONTH
            && self.end_day != WHOLE_MONTH
        {
            return month == self.start_month && (self.start_day..=self.end_day).contains(&day);
        }
        (self.start_month < month && month < self.end_month)
            || (month == self.start_month && (self.start_day == WHOLE_MONTH || day >= self.start_day))
            || (month == self.end_month && (self.end_day == WHOLE_MONTH || day <= self.end_day))
    }
}

/// Matches every point in one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Year {
    year: i32,
}

impl Year {
    #[must_use]
    pub const fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Predicate for Year {
    fn includes(&self, at: &Timestamp) -> bool {
        at.year_number() == self.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::constants::{AUGUST, JUNE, MAY, OCTOBER, SEPTEMBER};

    fn day(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::day(y, m, d).expect("valid date")
    }

    #[test]
    fn test_range_with_days() {
        let summer = RangeInYear::new(MAY, 31, SEPTEMBER, 6).expect("valid range");
        assert!(summer.includes(&day(2004, 5, 31)));
        assert!(summer.includes(&day(2004, 7, 4)));
        assert!(summer.includes(&day(2004, 9, 6)));
        assert!(!summer.includes(&day(2004, 5, 30)));
        assert!(!summer.includes(&day(2004, 9, 7)));
        // Month precision carries day 1
        assert!(summer.includes(&Timestamp::month(1986, JUNE).expect("valid month")));
    }

    #[test]
    fn test_single_day() {
        let equinox = RangeInYear::new(SEPTEMBER, 21, SEPTEMBER, 21).expect("valid range");
        assert!(equinox.includes(&day(2006, 9, 21)));
        assert!(!equinox.includes(&day(2006, 9, 14)));
        assert!(!equinox.includes(&day(2006, 10, 21)));
    }

    #[test]
    fn test_whole_months() {
        let october = RangeInYear::month(OCTOBER).expect("valid range");
        assert!(october.includes(&day(2005, 10, 1)));
        assert!(october.includes(&day(2005, 10, 31)));
        assert!(!october.includes(&day(2005, 11, 1)));

        let late_summer = RangeInYear::months(JUNE, AUGUST).expect("valid range");
        assert!(late_summer.includes(&day(2005, 7, 15)));
        assert!(!late_summer.includes(&day(2005, 9, 1)));
    }

    #[test]
    fn test_open_end_day() {
        let fall = RangeInYear::from_day(OCTOBER, 21, 12).expect("valid range");
        assert!(fall.includes(&day(2005, 10, 21)));
        assert!(fall.includes(&day(2005, 12, 31)));
        assert!(!fall.includes(&day(2005, 10, 20)));
    }

    #[test]
    fn test_rejects_wrap_and_bad_values() {
        assert!(matches!(
            RangeInYear::new(11, 1, 2, 28),
            Err(TemporalError::InvalidArgument(_))
        ));
        assert!(RangeInYear::new(9, 21, 9, 14).is_err());
        assert!(RangeInYear::month(13).is_err());
        assert!(RangeInYear::new(1, 32, 2, 0).is_err());
    }

    #[test]
    fn test_year() {
        let year = Year::new(2008);
        assert!(year.includes(&day(2008, 2, 29)));
        assert!(year.includes(&Timestamp::year(2008).expect("valid year")));
        assert!(!year.includes(&day(2009, 1, 1)));
    }
}
