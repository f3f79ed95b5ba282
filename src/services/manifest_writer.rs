use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use crate::error::BuildError;

/// Pretty-print `value` as JSON indented with `indent` spaces.
pub fn to_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<Vec<u8>, BuildError> {
    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}

/// Replace `path` with `contents` so readers see either the old file or
/// the complete new one.
///
/// The data goes to a temporary file in the destination directory, which
/// is then renamed over the target.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), BuildError> {
    let write_err = |source: std::io::Error| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut file = NamedTempFile::new_in(&dir).map_err(write_err)?;
    file.write_all(contents).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Serialize and atomically write `value`.
pub fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    indent: usize,
) -> Result<(), BuildError> {
    let json = to_json(value, indent)?;
    write_atomic(path, &json)?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "Wrote JSON");
    Ok(())
}
