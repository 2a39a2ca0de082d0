use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::file::read_file;

pub fn read_json<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T> {
    let file_path = file_path.as_ref();
    let content = read_file(file_path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("read_json::InvalidJson({})", file_path.display()))
}
