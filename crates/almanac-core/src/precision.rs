//! Calendar precision levels.
//!
//! ## Summary
//! A precision names the finest calendar field that carries meaning for a
//! timestamp. Levels are ordered from coarse to fine, with `Week` sitting
//! between `Month` and `Day`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::CoreError;

/// Ordered precision level, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Precision {
    /// Precision used for values that arrive without one.
    pub const DEFAULT: Self = Self::Minute;

    /// Returns every level from coarsest to finest.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Year,
            Self::Month,
            Self::Week,
            Self::Day,
            Self::Hour,
            Self::Minute,
            Self::Second,
            Self::Millisecond,
        ]
    }

    /// ## Summary
    /// Returns the minimum value of the calendar field named by this level.
    ///
    /// Date fields start at 1, time-of-day fields start at 0.
    #[must_use]
    pub const fn min_value(self) -> u32 {
        match self {
            Self::Year | Self::Month | Self::Week | Self::Day => 1,
            Self::Hour | Self::Minute | Self::Second | Self::Millisecond => 0,
        }
    }

    /// Returns the lowercase name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Millisecond => "millisecond",
        }
    }

    /// Returns `true` if `self` is strictly coarser than `other`.
    #[must_use]
    pub fn is_coarser_than(self, other: Self) -> bool {
        self < other
    }

    /// Returns `true` if `self` is strictly finer than `other`.
    #[must_use]
    pub fn is_finer_than(self, other: Self) -> bool {
        self > other
    }

    /// Returns `true` if values at this level carry a time of day.
    #[must_use]
    pub fn has_time_of_day(self) -> bool {
        self >= Self::Hour
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precision {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "year" => Self::Year,
            "month" => Self::Month,
            "week" => Self::Week,
            "day" => Self::Day,
            "hour" => Self::Hour,
            "minute" | "min" => Self::Minute,
            "second" | "sec" => Self::Second,
            "millisecond" | "milli" => Self::Millisecond,
            other => return Err(CoreError::ParseError(format!("unknown precision: {other}"))),
        })
    }
}
