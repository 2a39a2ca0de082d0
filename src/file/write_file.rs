use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Creates or truncates `file_path` and writes `content` as UTF-8.
pub fn write_file(file_path: impl AsRef<Path>, content: &str) -> Result<()> {
    let file_path = file_path.as_ref();
    fs::write(file_path, content)
        .with_context(|| format!("write_file::CannotWrite({})", file_path.display()))
}
