use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{consts::JSON_INDENT, file::write_file};

/// Pretty-prints `data` to `file_path` with a four-space indent.
pub fn write_json<T: Serialize + ?Sized>(file_path: impl AsRef<Path>, data: &T) -> Result<()> {
    let file_path = file_path.as_ref();
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
    data.serialize(&mut serializer)
        .with_context(|| format!("write_json::CannotSerialize({})", file_path.display()))?;
    let content = String::from_utf8(buffer)?;
    write_file(file_path, &content)
}
