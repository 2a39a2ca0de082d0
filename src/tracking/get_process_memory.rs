use anyhow::{Result, anyhow};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Resident set size of the current process, in bytes.
pub fn get_process_memory() -> Result<u64> {
    let stats = memory_stats::memory_stats().ok_or(anyhow!("get_process_memory::StatsUnavailable"))?;
    Ok(stats.physical_mem as u64)
}

pub fn get_process_memory_mb() -> Result<f64> {
    Ok(get_process_memory()? as f64 / BYTES_PER_MB)
}
