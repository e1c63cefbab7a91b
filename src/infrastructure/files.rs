//! Local file access for checks and HTML inputs
//!
//! Reads are synchronous; nothing else is in flight while they run.

use crate::error::{GraderError, GraderResult};
use std::path::Path;
use tracing::debug;

/// Fail with `MissingFile` unless `path` is an existing regular file.
///
/// The content is not inspected.
pub fn ensure_file_exists(path: &Path) -> GraderResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(GraderError::missing_file(path))
    }
}

pub fn read_bytes(path: &Path) -> GraderResult<Vec<u8>> {
    ensure_file_exists(path)?;
    std::fs::read(path).map_err(|source| GraderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an HTML file as text. Invalid UTF-8 is replaced rather than rejected.
pub fn read_html_file(path: &Path) -> GraderResult<String> {
    let bytes = read_bytes(path)?;
    debug!("Read {} bytes of HTML from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
