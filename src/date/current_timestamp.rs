use chrono::Local;

use crate::consts::TIMESTAMP_FORMAT;

/// Local time as `YYYY-MM-DD HH:MM:SS`.
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
