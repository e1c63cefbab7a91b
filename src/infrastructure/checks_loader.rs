//! Checks specification loading

use super::files::read_bytes;
use crate::domain::ChecksSpec;
use crate::error::{GraderError, GraderResult};
use std::path::Path;
use tracing::debug;

/// Load a JSON array of selectors from `path`, sorted ascending.
pub fn load_checks(path: &Path) -> GraderResult<ChecksSpec> {
    let raw = read_bytes(path)?;
    let spec = ChecksSpec::from_json_slice(&raw).map_err(|source| GraderError::MalformedChecks {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} checks from {}", spec.len(), path.display());
    Ok(spec)
}
