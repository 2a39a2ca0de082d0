use std::{fs, path::Path};

use anyhow::{Context, Result};

pub fn read_file(file_path: impl AsRef<Path>) -> Result<String> {
    let file_path = file_path.as_ref();
    fs::read_to_string(file_path)
        .with_context(|| format!("read_file::CannotRead({})", file_path.display()))
}
