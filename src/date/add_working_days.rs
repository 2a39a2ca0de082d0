use anyhow::{Result, anyhow};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Walks forward from `start_date` one day at a time until `num_days`
/// weekdays (Monday to Friday) have been counted.
pub fn add_working_days(start_date: NaiveDate, num_days: u32) -> Result<NaiveDate> {
    let mut current_date = start_date;
    let mut added_days = 0;
    while added_days < num_days {
        current_date = current_date
            .checked_add_days(Days::new(1))
            .ok_or(anyhow!("add_working_days::DateOutOfRange"))?;
        if !matches!(current_date.weekday(), Weekday::Sat | Weekday::Sun) {
            added_days += 1;
        }
    }
    Ok(current_date)
}
