//! Named calendar constants shared across crates.

use crate::error::CoreError;

/// Day of the week, numbered from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the day number (Sunday = 0 through Saturday = 6).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Returns the weekday for a day number, if it is in `0..=6`.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        Some(match n {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => return None,
        })
    }

    /// Returns all weekdays in order (Sunday through Saturday).
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Sunday,
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
        ]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CoreError;

    fn try_from(n: u8) -> Result<Self, CoreError> {
        Self::from_number(n).ok_or_else(|| {
            CoreError::InvalidArgument(format!("weekday must be in 0..=6, got {n}"))
        })
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.number()
    }
}

pub const SUNDAY: u8 = Weekday::Sunday.number();
pub const MONDAY: u8 = Weekday::Monday.number();
pub const TUESDAY: u8 = Weekday::Tuesday.number();
pub const WEDNESDAY: u8 = Weekday::Wednesday.number();
pub const THURSDAY: u8 = Weekday::Thursday.number();
pub const FRIDAY: u8 = Weekday::Friday.number();
pub const SATURDAY: u8 = Weekday::Saturday.number();

/// Week-of-month ordinals. Negative values count back from the end of the month.
pub const FIRST: i8 = 1;
pub const SECOND: i8 = 2;
pub const THIRD: i8 = 3;
pub const FOURTH: i8 = 4;
pub const FIFTH: i8 = 5;
pub const LAST: i8 = -1;
pub const SECOND_TO_LAST: i8 = -2;

pub const JANUARY: u32 = 1;
pub const FEBRUARY: u32 = 2;
pub const MARCH: u32 = 3;
pub const APRIL: u32 = 4;
pub const MAY: u32 = 5;
pub const JUNE: u32 = 6;
pub const JULY: u32 = 7;
pub const AUGUST: u32 = 8;
pub const SEPTEMBER: u32 = 9;
pub const OCTOBER: u32 = 10;
pub const NOVEMBER: u32 = 11;
pub const DECEMBER: u32 = 12;

/// Day-of-month sentinel meaning "the whole month".
pub const WHOLE_MONTH: u32 = 0;
