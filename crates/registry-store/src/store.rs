//! Filesystem-backed deployment document store.

use anyhow::{anyhow, Context, Result};
use registry_types::Deployment;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::paths::{asset_path, atomic_write};
use crate::ModuleKind;

/// Durable storage for deployment records: one pretty-printed JSON document
/// per `(module, version)` under a fixed assets root.
pub struct RegistryStore {
    assets_root: PathBuf,
}

impl RegistryStore {
    pub fn new<P: AsRef<Path>>(assets_root: P) -> Self {
        Self {
            assets_root: assets_root.as_ref().to_path_buf(),
        }
    }

    pub fn assets_root(&self) -> &Path {
        &self.assets_root
    }

    /// Locate the document for a module version.
    pub fn path(&self, module: ModuleKind, version: &str) -> Result<PathBuf> {
        asset_path(&self.assets_root, module, version)
    }

    /// Load the stored record. A missing document is an error: the updater
    /// can only amend versions a release process already wrote.
    pub fn load(&self, module: ModuleKind, version: &str) -> Result<Deployment> {
        let path = self.path(module, version)?;
        if !path.exists() {
            return Err(anyhow!(
                "Asset file not found: {}. Please ensure version {} exists for module {}",
                path.display(),
                version,
                module
            ));
        }
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read asset file {}", path.display()))?;
        let record: Deployment = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse deployment JSON {}", path.display()))?;
        debug!(path = %path.display(), "loaded deployment record");
        Ok(record)
    }

    /// Replace the stored document with `record`: whole-document overwrite,
    /// pretty-printed with a trailing newline.
    pub fn persist(&self, module: ModuleKind, version: &str, record: &Deployment) -> Result<()> {
        let path = self.path(module, version)?;
        let mut json = serde_json::to_string_pretty(record)
            .context("Failed to serialize deployment JSON")?;
        json.push('\n');
        atomic_write(&path, json.as_bytes())?;
        debug!(path = %path.display(), "persisted deployment record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_types::ChainId;

    const FIXTURE: &str = r#"{
  "released": true,
  "contractName": "SocialRecoveryModule",
  "version": "0.1.0",
  "networkAddresses": {
    "1": "0x949d01d424bE050D09C16025dd007CB59b3A8c66"
  },
  "abi": []
}
"#;

    fn store_with_fixture() -> (tempfile::TempDir, RegistryStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir
            .path()
            .join("safe-recovery-module/v0.1.0/social-recovery-module.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, FIXTURE).unwrap();
        let store = RegistryStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_load_parses_record() {
        let (_dir, store) = store_with_fixture();
        let record = store.load(ModuleKind::SocialRecovery, "0.1.0").unwrap();
        assert_eq!(record.contract_name, "SocialRecoveryModule");
        assert!(record.network_addresses.contains_key(&ChainId::from(1)));
    }

    #[test]
    fn test_load_missing_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegistryStore::new(dir.path());
        let err = store
            .load(ModuleKind::Allowance, "0.1.1")
            .unwrap_err()
            .to_string();
        assert!(err.contains("Asset file not found"));
    }

    #[test]
    fn test_persist_round_trips_with_trailing_newline() {
        let (_dir, store) = store_with_fixture();
        let record = store.load(ModuleKind::SocialRecovery, "0.1.0").unwrap();
        store
            .persist(ModuleKind::SocialRecovery, "0.1.0", &record)
            .unwrap();

        let path = store.path(ModuleKind::SocialRecovery, "0.1.0").unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.ends_with('\n'));
        assert!(!written.ends_with("\n\n"));

        let reloaded = store.load(ModuleKind::SocialRecovery, "0.1.0").unwrap();
        assert_eq!(record, reloaded);
    }
}
