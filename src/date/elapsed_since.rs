use std::time::{Duration, Instant};

const SECONDS_PER_DAY: u64 = 86_400;

/// Time elapsed since `start` as `HH:MM:SS`.
pub fn elapsed_since(start: Instant) -> String {
    format_hms(start.elapsed())
}

// Hours wrap at 24, whole days are dropped.
pub fn format_hms(duration: Duration) -> String {
    let secs = duration.as_secs() % SECONDS_PER_DAY;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
