//! Merging address observations into deployment records.

use anyhow::{anyhow, Result};
use registry_types::{ChainId, ChecksummedAddress, Deployment};
use std::fmt;
use std::path::PathBuf;
use tracing::info;

use crate::{ModuleKind, RegistryStore};

/// How an applied address changed the record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// The chain id was not present before.
    Added,
    /// The chain id was present with a different address.
    Updated,
    /// The chain id already held exactly this address.
    Unchanged,
}

impl ChangeKind {
    /// Lowercase name used in CI outputs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Updated => "updated",
            ChangeKind::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merge an address for `chain_id` into `record.network_addresses`.
///
/// The raw address is checksum-normalized first; a malformed address aborts
/// without modifying the record. Idempotent: applying the same pair twice
/// returns `Unchanged` on the second call and leaves the mapping untouched,
/// and an address differing only in letter case from the stored value is
/// `Unchanged` as well. The `BTreeMap` keeps keys ascending numerically.
pub fn apply_address(
    record: &mut Deployment,
    chain_id: ChainId,
    raw_address: &str,
) -> Result<ChangeKind> {
    let normalized: ChecksummedAddress = raw_address.parse()?;
    Ok(merge_address(record, chain_id, normalized))
}

/// Merge an already-normalized address. Infallible: by this point the only
/// outcomes are the three change kinds.
fn merge_address(
    record: &mut Deployment,
    chain_id: ChainId,
    address: ChecksummedAddress,
) -> ChangeKind {
    if record.network_addresses.get(&chain_id) == Some(&address) {
        return ChangeKind::Unchanged;
    }
    let kind = if record.network_addresses.contains_key(&chain_id) {
        ChangeKind::Updated
    } else {
        ChangeKind::Added
    };
    record.network_addresses.insert(chain_id, address);
    kind
}

/// Outcome of a registry update, for reporting.
#[derive(Debug)]
pub struct UpdateOutcome {
    pub kind: ChangeKind,
    pub message: String,
    pub asset_path: PathBuf,
}

/// Validate, load, merge, and persist one address observation.
///
/// All input validation happens before the document is read, and every
/// failure path leaves the stored document exactly as it was. `Unchanged`
/// outcomes skip the write entirely, so repeated identical runs are
/// byte-level no-ops.
pub fn update_registry(
    store: &RegistryStore,
    module: ModuleKind,
    version: &str,
    chain_id: ChainId,
    raw_address: &str,
) -> Result<UpdateOutcome> {
    let config = module.config();
    if !config.supported_versions.contains(&version) {
        return Err(anyhow!(
            "Invalid version \"{}\" for module \"{}\". Supported versions: {}",
            version,
            module,
            config.supported_versions.join(", ")
        ));
    }
    // Checksum up front so a bad address never reaches the filesystem.
    let normalized: ChecksummedAddress = raw_address.parse()?;

    let asset_path = store.path(module, version)?;
    let mut record = store.load(module, version)?;
    let kind = merge_address(&mut record, chain_id, normalized.clone());

    if kind == ChangeKind::Unchanged {
        return Ok(UpdateOutcome {
            kind,
            message: format!(
                "Chain ID {} already has the same address. No update needed.",
                chain_id
            ),
            asset_path,
        });
    }

    store.persist(module, version, &record)?;
    info!(
        module = %module,
        version,
        chain_id = %chain_id,
        action = kind.as_str(),
        "updated module registry"
    );

    let verb = match kind {
        ChangeKind::Added => "Added",
        _ => "Updated",
    };
    Ok(UpdateOutcome {
        kind,
        message: format!(
            "{} chain ID {} with address {} for {}",
            verb, chain_id, normalized, config.contract_name
        ),
        asset_path,
    })
}
