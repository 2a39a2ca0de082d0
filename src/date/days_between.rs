use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::consts::DEFAULT_DATE_FORMAT;

const SECONDS_PER_DAY: i64 = 86_400;

pub fn days_between(date1: &str, date2: &str) -> Result<i64> {
    days_between_with_format(date1, date2, DEFAULT_DATE_FORMAT)
}

/// Absolute number of whole days between two dates. Partial days round
/// towards the earlier date before the sign is dropped.
pub fn days_between_with_format(date1: &str, date2: &str, date_format: &str) -> Result<i64> {
    let d1 = parse(date1, date_format)?;
    let d2 = parse(date2, date_format)?;
    let days = (d2 - d1).num_seconds().div_euclid(SECONDS_PER_DAY);
    Ok(days.abs())
}

// Formats without a time component only parse as a NaiveDate.
fn parse(text: &str, date_format: &str) -> Result<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, date_format) {
        return Ok(datetime);
    }
    let date = NaiveDate::parse_from_str(text, date_format)
        .with_context(|| format!("days_between::InvalidDate({text:?}, {date_format:?})"))?;
    Ok(date.and_time(NaiveTime::MIN))
}
