//! RFC 5545 recurrence examples expressed as temporal expressions and
//! checked against the `rrule` crate's expansion.

use almanac_core::Precision;
use almanac_core::constants::{FIRST, FRIDAY, MARCH, MONDAY, SECOND_TO_LAST, THURSDAY, TUESDAY};
use almanac_temporal::expr::EveryInterval;
use almanac_temporal::{DateRange, Expression};
use almanac_test::{RecurrenceCase, assert_case};

use super::helpers::{day, days, hour};

fn from(y: i32, m: u32, d: u32) -> DateRange {
    days(day(y, m, d), day(y + 2, 12, 31))
}

#[expect(clippy::too_many_lines)]
fn recurrence_cases() -> Vec<RecurrenceCase> {
    vec![
        RecurrenceCase {
            name: "monthly_first_friday",
            rruleset: "DTSTART:19970905T090000Z\nRRULE:FREQ=MONTHLY;COUNT=10;BYDAY=1FR",
            expression: Expression::day_in_month(FIRST, FRIDAY).expect("valid rule"),
            range: from(1997, 9, 5),
            limit: 10,
        },
        RecurrenceCase {
            name: "monthly_second_to_last_monday",
            rruleset: "DTSTART:19970922T090000Z\nRRULE:FREQ=MONTHLY;COUNT=6;BYDAY=-2MO",
            expression: Expression::day_in_month(SECOND_TO_LAST, MONDAY).expect("valid rule"),
            range: from(1997, 9, 22),
            limit: 6,
        },
        RecurrenceCase {
            name: "weekly_tuesday_thursday",
            rruleset: "DTSTART:19970902T090000Z\nRRULE:FREQ=WEEKLY;COUNT=10;WKST=SU;BYDAY=TU,TH",
            expression: Expression::day_in_week(TUESDAY).expect("valid weekday")
                | Expression::day_in_week(THURSDAY).expect("valid weekday"),
            range: from(1997, 9, 2),
            limit: 10,
        },
        RecurrenceCase {
            name: "fortnightly_tuesday_thursday",
            rruleset: "DTSTART:19970902T090000Z\nRRULE:FREQ=WEEKLY;INTERVAL=2;COUNT=8;WKST=SU;BYDAY=TU,TH",
            expression: Expression::weekday_interval(day(1997, 9, 2), 2, [TUESDAY, THURSDAY])
                .expect("valid rule"),
            range: from(1997, 9, 2),
            limit: 8,
        },
        RecurrenceCase {
            name: "weekly_from_start",
            rruleset: "DTSTART:19970902T090000Z\nRRULE:FREQ=WEEKLY;COUNT=10",
            expression: Expression::every(day(1997, 9, 2), 7).expect("valid rule"),
            range: from(1997, 9, 2),
            limit: 10,
        },
        RecurrenceCase {
            name: "every_ten_days",
            rruleset: "DTSTART:19970902T090000Z\nRRULE:FREQ=DAILY;INTERVAL=10;COUNT=5",
            expression: Expression::day_interval(day(1997, 9, 2), 10).expect("valid rule"),
            range: from(1997, 9, 2),
            limit: 5,
        },
        RecurrenceCase {
            name: "monthly_second_and_fifteenth",
            rruleset: "DTSTART:19970902T090000Z\nRRULE:FREQ=MONTHLY;COUNT=10;BYMONTHDAY=2,15",
            expression: Expression::range_in_month(2, 2).expect("valid range")
                | Expression::range_in_month(15, 15).expect("valid range"),
            range: from(1997, 9, 2),
            limit: 10,
        },
        RecurrenceCase {
            name: "yearly_march_thursdays",
            rruleset: "DTSTART:19970313T090000Z\nRRULE:FREQ=YEARLY;COUNT=11;BYMONTH=3;BYDAY=TH",
            expression: Expression::range_in_year(MARCH, 0, MARCH, 0).expect("valid range")
                & Expression::day_in_week(THURSDAY).expect("valid weekday"),
            range: from(1997, 3, 13),
            limit: 11,
        },
        RecurrenceCase {
            name: "every_other_month_tuesdays",
            rruleset: "DTSTART:19970902T090000Z\nRRULE:FREQ=MONTHLY;INTERVAL=2;COUNT=10;BYDAY=TU",
            expression: Expression::from(
                EveryInterval::with_precision(day(1997, 9, 2), 2, Precision::Month)
                    .expect("valid rule"),
            ) & Expression::day_in_week(TUESDAY).expect("valid weekday"),
            range: from(1997, 9, 2),
            limit: 10,
        },
        RecurrenceCase {
            name: "every_three_hours_until_five",
            rruleset: "DTSTART:19970902T090000Z\nRRULE:FREQ=HOURLY;INTERVAL=3;UNTIL=19970902T170000Z",
            expression: Expression::every(hour(1997, 9, 2, 9), 3).expect("valid rule"),
            range: days(hour(1997, 9, 2, 9), hour(1997, 9, 2, 17)),
            limit: 100,
        },
    ]
}

/// ## Summary
/// Every case must enumerate exactly what the RFC 5545 rule expands to.
#[test_log::test]
fn rfc5545_examples_match_rrule() {
    for case in recurrence_cases() {
        assert_case(&case);
    }
}

#[test]
fn first_friday_dates_are_the_published_ones() {
    let expr = Expression::day_in_month(FIRST, FRIDAY).expect("valid rule");
    let found: Vec<_> = expr.dates(&from(1997, 9, 5), 4).collect();
    assert_eq!(
        found,
        vec![day(1997, 9, 5), day(1997, 10, 3), day(1997, 11, 7), day(1997, 12, 5)]
    );
}
