use anyhow::{Context, Result};
use chrono::{DateTime, Days, FixedOffset, Timelike};
use regex::Regex;

type DateTimeRange = (Option<DateTime<FixedOffset>>, Option<DateTime<FixedOffset>>);

/// Start and end datetimes encoded in names like
/// `A20230101.2300+0000-0000+0000_1.xml`. The end only carries a time, so it
/// shares the start date, or falls on the next day when its hour is 0.
///
/// A name that does not follow the pattern yields `(None, None)`.
pub fn extract_datetime_from_filename(filename: &str) -> Result<DateTimeRange> {
    let pattern = r"^[A-Za-z]*(\d{8})\.(\d{4}[+-]\d{4})-(\d{4}[+-]\d{4}).*\.xml";
    let datetime_format = "%Y%m%d.%H%M%z";
    let re = Regex::new(pattern)?;

    let Some(captures) = re.captures(filename) else {
        return Ok((None, None));
    };
    let start_date = &captures[1];
    let start_time = &captures[2];
    let end_time = &captures[3];

    let context = || format!("extract_datetime_from_filename::InvalidDatetime({filename})");
    let start = DateTime::parse_from_str(&format!("{start_date}.{start_time}"), datetime_format)
        .with_context(context)?;
    let mut end = DateTime::parse_from_str(&format!("{start_date}.{end_time}"), datetime_format)
        .with_context(context)?;
    if end.hour() == 0 {
        end = end.checked_add_days(Days::new(1)).with_context(context)?;
    }
    Ok((Some(start), Some(end)))
}
