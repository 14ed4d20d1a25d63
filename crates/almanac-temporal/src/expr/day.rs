//! Clock-time windows within a day.

use chrono::{NaiveTime, Timelike};

use super::Predicate;
use crate::error::{TemporalError, TemporalResult};
use crate::timestamp::Timestamp;

const MILLIS_PER_DAY: u64 = 86_400_000;

fn millis_of_day(time: NaiveTime) -> u64 {
    u64::from(time.num_seconds_from_midnight()) * 1000 + u64::from(time.nanosecond() / 1_000_000)
}

/// ## Summary
/// Matches a window of the day between two clock times, end included.
///
/// A window whose end is not after its start runs past midnight into the
/// next day. Timestamps without a time of day (day precision or coarser)
/// match only when `less_precise_match` is set, which is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeInDay {
    start: NaiveTime,
    end: NaiveTime,
    less_precise_match: bool,
}

impl RangeInDay {
    /// ## Errors
    /// Returns `InvalidArgument` if an hour is outside `0..=23` or a minute
    /// is outside `0..=59`.
    pub fn new(
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> TemporalResult<Self> {
        Ok(Self {
            start: clock(start_hour, start_minute)?,
            end: clock(end_hour, end_minute)?,
            less_precise_match: true,
        })
    }

    /// Sets whether timestamps without a time of day match.
    #[must_use]
    pub const fn less_precise_match(mut self, matches: bool) -> Self {
        self.less_precise_match = matches;
        self
    }

    /// Returns `true` if the window runs past midnight.
    #[must_use]
    pub fn spans_midnight(&self) -> bool {
        self.end <= self.start
    }
}

fn clock(hour: u32, minute: u32) -> TemporalResult<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        TemporalError::InvalidArgument(format!("invalid clock time {hour}:{minute:02}"))
    })
}

impl Predicate for RangeInDay {
    fn includes(&self, at: &Timestamp) -> bool {
        if !at.precision().has_time_of_day() {
            return self.less_precise_match;
        }
        let time = at.datetime().time();
        if !self.spans_midnight() {
            return self.start <= time && time <= self.end;
        }
        // Lay the window across two consecutive days
        let start = millis_of_day(self.start);
        let end = millis_of_day(self.end) + MILLIS_PER_DAY;
        let mut point = millis_of_day(time);
        if point < start {
            point += MILLIS_PER_DAY;
        }
        (start..=end).contains(&point)
    }
}
