//! English calendar names used by shorthand expressions.

use almanac_core::Weekday;
use almanac_core::constants::{FIRST, FOURTH, LAST, SECOND, SECOND_TO_LAST, THIRD};

const WEEKDAYS: [(&str, Weekday); 7] = [
    ("sunday", Weekday::Sunday),
    ("monday", Weekday::Monday),
    ("tuesday", Weekday::Tuesday),
    ("wednesday", Weekday::Wednesday),
    ("thursday", Weekday::Thursday),
    ("friday", Weekday::Friday),
    ("saturday", Weekday::Saturday),
];

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Longer names first so `second_to_last` wins over `second`.
const ORDINALS: [(&str, i8); 6] = [
    ("second_to_last", SECOND_TO_LAST),
    ("first", FIRST),
    ("second", SECOND),
    ("third", THIRD),
    ("fourth", FOURTH),
    ("last", LAST),
];

pub(crate) fn weekday(name: &str) -> Option<Weekday> {
    WEEKDAYS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, day)| *day)
}

pub(crate) fn month(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|candidate| *candidate == name)
        .and_then(|index| u32::try_from(index + 1).ok())
}

/// Splits a leading week-of-month ordinal and its `_` separator off `name`.
pub(crate) fn split_ordinal(name: &str) -> Option<(i8, &str)> {
    ORDINALS.iter().find_map(|(prefix, ordinal)| {
        name.strip_prefix(*prefix)
            .and_then(|rest| rest.strip_prefix('_'))
            .map(|rest| (*ordinal, rest))
    })
}

/// Parses a day number with its English suffix, e.g. `3rd` or `14th`.
pub(crate) fn day_ordinal(text: &str) -> Option<u32> {
    let digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| text.strip_suffix(*suffix))?;
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
