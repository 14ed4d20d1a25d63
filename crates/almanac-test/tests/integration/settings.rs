use almanac_core::Precision;
use almanac_core::config::Settings;
use almanac_core::constants::SATURDAY;
use almanac_schedule::{Event, Schedule};
use almanac_temporal::Expression;
use chrono::NaiveDate;

use super::helpers::{day, days};

#[test_log::test]
fn schedule_follows_loaded_settings() -> anyhow::Result<()> {
    let settings = Settings::from_toml_str(
        r#"
        [defaults]
        precision = "day"

        [schedule]
        occurrence_limit = 3
        "#,
    )?;
    assert_eq!(settings.logging.level, "info");

    let mut schedule = Schedule::from_settings(&settings);
    assert_eq!(schedule.occurrence_limit(), 3);

    let saturdays = Event::new("market");
    schedule.add(saturdays.clone(), Expression::day_in_week(SATURDAY)?);
    let year = days(day(2004, 1, 1), day(2004, 12, 31));
    let dates: Vec<_> = schedule.dates(&saturdays, &year).collect();
    assert_eq!(dates, vec![day(2004, 1, 3), day(2004, 1, 10), day(2004, 1, 17)]);

    let bare = NaiveDate::from_ymd_opt(2004, 1, 3)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .ok_or_else(|| anyhow::anyhow!("invalid date"))?;
    let at = schedule.timestamp(bare);
    assert_eq!(at.precision(), Precision::Day);
    assert_eq!(schedule.events(&at), vec![&saturdays]);
    Ok(())
}

#[test]
fn unknown_precision_is_rejected() {
    let result = Settings::from_toml_str(
        r#"
        [defaults]
        precision = "fortnight"
        "#,
    );
    assert!(result.is_err());
}
