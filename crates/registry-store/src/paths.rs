//! Asset path construction and atomic writes.

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

use crate::ModuleKind;

/// Reject version strings that could escape the assets tree when used as a
/// path component. The version allowlist already constrains the values the
/// CLI accepts; this check stands on its own for library callers.
pub fn validate_version_path(version: &str) -> Result<()> {
    if version.contains("..") || version.contains('/') || version.contains('\\') {
        return Err(anyhow!(
            "Invalid version: \"{}\" contains illegal path characters",
            version
        ));
    }
    Ok(())
}

/// Full path of the deployment document for a module version:
/// `<assets_root>/<module dir>/v<version>/<json file>`.
pub fn asset_path(assets_root: &Path, module: ModuleKind, version: &str) -> Result<PathBuf> {
    validate_version_path(version)?;
    let config = module.config();
    Ok(assets_root
        .join(config.dir)
        .join(format!("v{}", version))
        .join(config.json_file))
}

/// Write a file atomically (write to a sibling `.tmp`, then rename), so a
/// crash mid-write never leaves a truncated document behind.
pub fn atomic_write(path: &Path, contents: &[u8]) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, contents)
        .map_err(|e| anyhow!("Failed to write temp file {}: {}", tmp_path.display(), e))?;
    std::fs::rename(&tmp_path, path).map_err(|e| {
        anyhow!(
            "Failed to rename {} to {}: {}",
            tmp_path.display(),
            path.display(),
            e
        )
    })?;
    Ok(())
}
