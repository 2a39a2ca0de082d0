use std::{
    fmt,
    time::{Duration, Instant},
};

use tracing::{info, warn};

use crate::tracking::get_process_memory;

/// Memory and wall-clock cost of one call. Memory readings are `None` when
/// the platform could not provide them.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackReport {
    pub name: String,
    pub mem_before: Option<u64>,
    pub mem_after: Option<u64>,
    pub elapsed: Duration,
}

impl TrackReport {
    pub fn consumed(&self) -> Option<i64> {
        Some(self.mem_after? as i64 - self.mem_before? as i64)
    }
}

impl fmt::Display for TrackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |value: Option<i64>| value.map_or("?".to_string(), |v| v.to_string());
        write!(
            f,
            "{}: mem before: {}, after: {}, consumed: {}; exec time: {}",
            self.name,
            show(self.mem_before.map(|b| b as i64)),
            show(self.mem_after.map(|a| a as i64)),
            show(self.consumed()),
            self.elapsed.as_secs_f64()
        )
    }
}

pub fn measure<F, T>(name: &str, f: F) -> (T, TrackReport)
where
    F: FnOnce() -> T,
{
    let mem_before = read_memory();
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    let mem_after = read_memory();
    let report = TrackReport {
        name: name.to_string(),
        mem_before,
        mem_after,
        elapsed,
    };
    (result, report)
}

/// Runs `f`, logs its [`TrackReport`] and hands back its result.
pub fn track<F, T>(name: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let (result, report) = measure(name, f);
    info!(
        name = %report.name,
        mem_before = ?report.mem_before,
        mem_after = ?report.mem_after,
        consumed = ?report.consumed(),
        exec_time = ?report.elapsed,
        "{report}"
    );
    result
}

fn read_memory() -> Option<u64> {
    match get_process_memory() {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            warn!("track: {err:#}");
            None
        }
    }
}
