use almanac_temporal::{DateRange, Expression, Timestamp};
use chrono::NaiveDateTime;
use rrule::RRuleSet;

/// An expression paired with the RFC 5545 rule it should reproduce.
pub struct RecurrenceCase {
    pub name: &'static str,
    pub rruleset: &'static str,
    pub expression: Expression,
    /// Range enumerated by the expression; its start sets the comparison precision.
    pub range: DateRange,
    pub limit: u16,
}

/// ## Summary
/// Asserts that the expression enumerates the same occurrences as the rule.
///
/// Rule occurrences are coerced to the range's precision before comparing,
/// so a day-precision range matches rules that fire at 09:00.
///
/// ## Panics
/// Panics if the rule does not parse or the occurrences differ.
pub fn assert_case(case: &RecurrenceCase) {
    let rrule_set: RRuleSet = case
        .rruleset
        .parse()
        .unwrap_or_else(|err| panic!("Failed to parse {}: {}", case.name, err));

    let precision = case.range.start().precision();
    let expected: Vec<NaiveDateTime> = rrule_set
        .all(case.limit)
        .dates
        .iter()
        .map(|dt| Timestamp::at(dt.naive_utc(), precision).datetime())
        .collect();

    let actual: Vec<NaiveDateTime> = case
        .expression
        .dates(&case.range, usize::from(case.limit))
        .map(|at| at.datetime())
        .collect();

    tracing::debug!(case = case.name, count = actual.len(), "Compared recurrence case");
    assert_eq!(actual, expected, "Case {} did not match", case.name);
}
