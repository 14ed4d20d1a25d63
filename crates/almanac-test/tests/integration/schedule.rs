use almanac_schedule::{Event, Schedule};
use almanac_sugar::{ExpressionBuilder, SugarResult, shorthand};
use almanac_temporal::DateRange;

use super::helpers::{day, days, minute};

fn street_cleaning() -> SugarResult<Schedule> {
    let north = ExpressionBuilder::new()
        .on(shorthand::parse("monday")?)
        .possibly(shorthand::parse("wednesday")?)
        .possibly(shorthand::parse("friday")?)
        .occurs(shorthand::parse("daily_8_00am_to_11_00am")?)
        .build()?;
    let south = ExpressionBuilder::new()
        .on(shorthand::parse("tuesday")?)
        .possibly(shorthand::parse("thursday")?)
        .occurs(shorthand::parse("daily_11_30am_to_2_00pm")?)
        .build()?;

    let mut schedule = Schedule::new();
    schedule.add(Event::new("north side"), north);
    schedule.add(Event::new("south side"), south);
    Ok(schedule)
}

#[test_log::test]
fn which_side_to_move_the_car() {
    let schedule = street_cleaning().expect("valid shorthand");

    assert_eq!(
        schedule.events(&minute(2007, 11, 26, 10, 0)),
        vec![&Event::new("north side")]
    );
    assert_eq!(
        schedule.events(&minute(2007, 11, 27, 12, 0)),
        vec![&Event::new("south side")]
    );
    assert!(schedule.events(&minute(2007, 12, 1, 10, 0)).is_empty());
    assert!(schedule.events(&minute(2007, 11, 26, 12, 0)).is_empty());
}

#[test]
fn cleaning_days_in_a_week() {
    let schedule = street_cleaning().expect("valid shorthand");
    let week = days(day(2007, 11, 25), day(2007, 12, 1));

    let north: Vec<u32> = schedule
        .dates("north side", &week)
        .map(|at| at.day_of_month())
        .collect();
    assert_eq!(north, vec![26, 28, 30]);

    let all: Vec<u32> = schedule
        .scheduled_dates(&week)
        .iter()
        .map(|at| at.day_of_month())
        .collect();
    assert_eq!(all, vec![26, 27, 28, 29, 30]);
}

#[test]
fn minute_ranges_enumerate_the_window() {
    let schedule = street_cleaning().expect("valid shorthand");
    let morning = DateRange::new(minute(2007, 11, 27, 11, 0), minute(2007, 11, 27, 15, 0));
    let south: Vec<_> = schedule.dates("south side", &morning).collect();
    assert_eq!(south.len(), 151);
    assert_eq!(south.first(), Some(&minute(2007, 11, 27, 11, 30)));
    assert_eq!(south.last(), Some(&minute(2007, 11, 27, 14, 0)));
}
