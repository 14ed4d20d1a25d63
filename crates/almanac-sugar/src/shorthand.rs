//! Shorthand names for common expressions.
//!
//! ## Summary
//! Turns names such as `daily_8_45am_to_2_00pm`, `tuesday`, `last_friday`,
//! `weekly_monday_to_friday`, `monthly_3rd_to_14th` or
//! `yearly_may_31_to_september_6` into expressions.
//!
//! Clock times are written `<h>_<mm><am|pm>` with the hour in `1..=12` and
//! two-digit minutes.

use almanac_temporal::Expression;

use crate::error::{SugarError, SugarResult};
use crate::names;

/// ## Summary
/// Parses a shorthand name into an expression.
///
/// ## Errors
/// Returns `UnknownShorthand` if the name matches no known form, or a
/// `Temporal` error if it names values the expression rejects.
pub fn parse(name: &str) -> SugarResult<Expression> {
    let name = name.trim();
    let Some(expression) = parse_name(name)? else {
        tracing::debug!(name, "Unknown shorthand");
        return Err(SugarError::UnknownShorthand(name.to_string()));
    };
    tracing::trace!(name, kind = expression.kind(), "Parsed shorthand");
    Ok(expression)
}

fn parse_name(name: &str) -> SugarResult<Option<Expression>> {
    if let Some(rest) = name.strip_prefix("daily_") {
        return daily(rest);
    }
    if let Some(rest) = name.strip_prefix("weekly_") {
        return weekly(rest);
    }
    if let Some(rest) = name.strip_prefix("monthly_") {
        return monthly(rest);
    }
    if let Some(rest) = name.strip_prefix("yearly_") {
        return yearly(rest);
    }
    if let Some(day) = names::weekday(name) {
        return Ok(Some(Expression::day_in_week(day)?));
    }
    if let Some((ordinal, rest)) = names::split_ordinal(name)
        && let Some(day) = names::weekday(rest)
    {
        return Ok(Some(Expression::day_in_month(ordinal, day)?));
    }
    Ok(None)
}

fn daily(rest: &str) -> SugarResult<Option<Expression>> {
    let Some((start, end)) = rest.split_once("_to_") else {
        return Ok(None);
    };
    let (Some((start_hour, start_minute)), Some((end_hour, end_minute))) = (clock(start), clock(end))
    else {
        return Ok(None);
    };
    Ok(Some(Expression::range_in_day(
        start_hour,
        start_minute,
        end_hour,
        end_minute,
    )?))
}

fn weekly(rest: &str) -> SugarResult<Option<Expression>> {
    let Some((start, end)) = rest.split_once("_to_") else {
        return Ok(None);
    };
    let (Some(start), Some(end)) = (names::weekday(start), names::weekday(end)) else {
        return Ok(None);
    };
    Ok(Some(Expression::range_in_week(start, end)?))
}

fn monthly(rest: &str) -> SugarResult<Option<Expression>> {
    let Some((start, end)) = rest.split_once("_to_") else {
        return Ok(None);
    };
    let (Some(start), Some(end)) = (names::day_ordinal(start), names::day_ordinal(end)) else {
        return Ok(None);
    };
    Ok(Some(Expression::range_in_month(start, end)?))
}

fn yearly(rest: &str) -> SugarResult<Option<Expression>> {
    let Some((start, end)) = rest.split_once("_to_") else {
        return Ok(None);
    };
    let (Some((start_month, start_day)), Some((end_month, end_day))) =
        (month_day(start), month_day(end))
    else {
        return Ok(None);
    };
    Ok(Some(Expression::range_in_year(
        start_month,
        start_day,
        end_month,
        end_day,
    )?))
}

fn digits(text: &str, max_len: usize) -> Option<u32> {
    if text.is_empty() || text.len() > max_len || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// `may_31` -> `(5, 31)`
fn month_day(text: &str) -> Option<(u32, u32)> {
    let (month, day) = text.rsplit_once('_')?;
    Some((names::month(month)?, digits(day, 2)?))
}

/// `2_00pm` -> `(14, 0)`; `12_15am` -> `(0, 15)`
fn clock(text: &str) -> Option<(u32, u32)> {
    let (hour, rest) = text.split_once('_')?;
    let (minute, meridiem) = rest.split_at_checked(2)?;
    let hour = digits(hour, 2).filter(|h| (1..=12).contains(h))?;
    let minute = digits(minute, 2)?;
    let hour = match meridiem {
        "am" => hour % 12,
        "pm" => hour % 12 + 12,
        _ => return None,
    };
    Some((hour, minute))
}
