use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Size in bytes.
pub fn get_file_size(file_path: impl AsRef<Path>) -> Result<u64> {
    let file_path = file_path.as_ref();
    let metadata = fs::metadata(file_path)
        .with_context(|| format!("get_file_size::CannotStat({})", file_path.display()))?;
    Ok(metadata.len())
}
