//! Composite expressions modelled on real calendars.

use almanac_core::constants::{
    AUGUST, FIRST, FRIDAY, JUNE, LAST, MAY, MONDAY, SATURDAY, SEPTEMBER, THURSDAY, TUESDAY,
    WEDNESDAY,
};
use almanac_sugar::{ExpressionBuilder, shorthand};
use almanac_temporal::expr::RangeInDay;
use almanac_temporal::{Expression, Point, TemporalError, Timestamp};

use super::helpers::{day, days, hour, minute, second};

fn summer_time() -> Expression {
    let may = Expression::range_in_year(MAY, 0, MAY, 0).expect("valid range");
    let monday_to_saturday = Expression::range_in_week(MONDAY, SATURDAY).expect("valid range");
    let last_week = Expression::week_in_month(LAST).expect("valid rule");
    let last_week_of_may = may & monday_to_saturday.clone() & last_week;

    let september = Expression::range_in_year(SEPTEMBER, 0, SEPTEMBER, 0).expect("valid range");
    let first_week = Expression::week_in_month(FIRST).expect("valid rule");
    let until_labor_day = (september & first_week) - monday_to_saturday;

    let june_through_august = Expression::range_in_year(JUNE, 1, AUGUST, 0).expect("valid range");

    last_week_of_may | until_labor_day | june_through_august
}

#[test_log::test]
fn summer_runs_from_memorial_day_to_labor_day() {
    let summer = summer_time();
    assert!(summer.includes(&day(2004, 5, 31)));
    assert!(summer.includes(&day(2004, 7, 4)));
    assert!(!summer.includes(&hour(2004, 9, 6, 0)));
    assert!(!summer.includes(&day(2004, 5, 24)));

    // Sunday 2004-09-05 falls in the first week but before Labor Day
    assert!(summer.includes(&day(2004, 9, 5)));
}

#[test]
fn nyc_alternate_side_parking() {
    let mon_wed_fri = Expression::day_in_week(MONDAY).expect("valid weekday")
        | Expression::day_in_week(WEDNESDAY).expect("valid weekday")
        | Expression::day_in_week(FRIDAY).expect("valid weekday");
    assert!(mon_wed_fri.includes(&minute(2004, 3, 10, 19, 15)));
    assert!(!mon_wed_fri.includes(&minute(2004, 3, 14, 9, 0)));

    let eight_to_eleven = Expression::range_in_day(8, 0, 11, 0).expect("valid window");
    let tues_thurs = Expression::day_in_week(TUESDAY).expect("valid weekday")
        | Expression::day_in_week(THURSDAY).expect("valid weekday");
    let eleven_thirty_to_two = Expression::range_in_day(11, 30, 14, 0).expect("valid window");
    assert!(eleven_thirty_to_two.includes(&minute(2004, 3, 8, 12, 0)));
    assert!(!eleven_thirty_to_two.includes(&minute(2004, 3, 11, 0, 0)));

    let ticket = (mon_wed_fri & eight_to_eleven) | (tues_thurs & eleven_thirty_to_two);
    assert!(ticket.includes(&minute(2004, 3, 11, 12, 15)));
    assert!(ticket.includes(&minute(2004, 3, 10, 9, 15)));
    assert!(ticket.includes(&minute(2004, 3, 10, 8, 0)));
    assert!(!ticket.includes(&minute(2004, 3, 11, 1, 15)));
}

#[test]
fn memorial_day_off_work() {
    let job = Expression::range_in_week(MONDAY, FRIDAY).expect("valid range")
        & Expression::range_in_day(9, 0, 17, 0).expect("valid window");
    let memorial_day = minute(2006, 5, 29, 10, 12);
    assert!(job.includes(&memorial_day));
    assert!(job.includes(&minute(2006, 5, 30, 14, 0)));

    let with_holiday = job - Expression::spec(memorial_day);
    assert!(!with_holiday.includes(&memorial_day));
    assert!(with_holiday.includes(&minute(2006, 5, 30, 14, 0)));

    let rule = Expression::range_in_year(MAY, 0, MAY, 0).expect("valid range")
        & Expression::day_in_month(LAST, MONDAY).expect("valid rule");
    let observed: Vec<_> = rule
        .dates(&days(day(2004, 1, 1), day(2008, 12, 31)), 0)
        .collect();
    assert_eq!(
        observed,
        vec![
            day(2004, 5, 31),
            day(2005, 5, 30),
            day(2006, 5, 29),
            day(2007, 5, 28),
            day(2008, 5, 26),
        ]
    );
}

#[test]
fn wednesday_through_saturday_mornings_at_second_precision() {
    let expr = Expression::range_in_week(WEDNESDAY, SATURDAY).expect("valid range")
        & Expression::range_in_day(6, 0, 12, 0).expect("valid window");
    assert!(!expr.includes(&second(2007, 9, 26, 0, 0, 0)));
    assert!(expr.includes(&second(2007, 9, 27, 6, 59, 59)));
    assert!(!expr.includes(&second(2007, 9, 28, 0, 0, 0)));
    assert!(expr.includes(&second(2007, 9, 29, 11, 0, 0)));
}

#[test]
fn mixed_precision_intersection() {
    // A month-precision date matches any finer point inside that month
    let march = Expression::spec(Timestamp::month(2004, 3).expect("valid month"));
    let mornings = Expression::range_in_day(8, 0, 12, 0).expect("valid window");
    let expr = march & mornings;
    assert!(expr.includes(&minute(2004, 3, 17, 9, 30)));
    assert!(!expr.includes(&minute(2004, 3, 17, 13, 0)));
    assert!(!expr.includes(&minute(2004, 4, 1, 9, 30)));

    // Day precision has no time of day, so the window lets it through
    assert!(expr.includes(&day(2004, 3, 17)));

    let strict = Expression::spec(Timestamp::month(2004, 3).expect("valid month"))
        & Expression::from(
            RangeInDay::new(8, 0, 12, 0)
                .expect("valid window")
                .less_precise_match(false),
        );
    assert!(!strict.includes(&day(2004, 3, 17)));
    assert!(strict.includes(&minute(2004, 3, 17, 9, 30)));
}

#[test]
fn week_interval_across_new_year() {
    let every_third = Expression::week_interval(day(2013, 12, 25), 3).expect("valid rule");
    let sundays: Vec<_> = every_third
        .dates(&days(day(2013, 12, 1), day(2014, 3, 1)), 0)
        .filter(|at| at.weekday() == 0)
        .collect();
    assert_eq!(
        sundays,
        vec![
            day(2013, 12, 22),
            day(2014, 1, 12),
            day(2014, 2, 2),
            day(2014, 2, 23),
        ]
    );
}

#[test]
fn builder_and_shorthand_compose() {
    let expr = ExpressionBuilder::new()
        .occurs(shorthand::parse("daily_11_00am_to_3_00pm").expect("known shorthand"))
        .on(shorthand::parse("weekly_monday_to_friday").expect("known shorthand"))
        .except(shorthand::parse("last_friday").expect("known shorthand"))
        .build()
        .expect("expressions added");
    assert!(expr.includes(&minute(2004, 5, 21, 12, 0)));
    assert!(!expr.includes(&minute(2004, 5, 28, 12, 0)));
    assert!(!expr.includes(&minute(2004, 5, 22, 12, 0)));
}

#[test]
fn span_queries_reject_calendar_rules() {
    let window = days(day(2004, 5, 1), day(2004, 5, 3));
    let fixed = Expression::spec(day(2004, 5, 2)) | Expression::after(day(2004, 4, 1), false);
    assert_eq!(fixed.includes_point(&Point::Span(window)), Ok(true));

    let calendar = Expression::day_in_week(SATURDAY).expect("valid weekday");
    assert!(matches!(
        calendar.includes_point(&Point::Span(window)),
        Err(TemporalError::TypeMismatch(_))
    ));
}
