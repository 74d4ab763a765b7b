//! Module allowlist.
//!
//! The updater only touches modules and versions listed here. Unknown module
//! strings and unlisted versions are rejected before any file access, which
//! also keeps user-supplied input out of path construction.

use anyhow::{anyhow, Error};
use std::fmt;
use std::str::FromStr;

/// A module family the updater may write.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Allowance,
    SocialRecovery,
}

/// Storage layout and supported versions for one module family.
#[derive(Debug, Clone, Copy)]
pub struct ModuleConfig {
    /// Subdirectory under the assets root.
    pub dir: &'static str,
    /// Canonical contract name stored in the deployment record.
    pub contract_name: &'static str,
    /// JSON file name inside the version directory.
    pub json_file: &'static str,
    /// Versions the updater may modify.
    pub supported_versions: &'static [&'static str],
}

const ALLOWANCE: ModuleConfig = ModuleConfig {
    dir: "allowance-module",
    contract_name: "AllowanceModule",
    json_file: "allowance-module.json",
    supported_versions: &["0.1.1"],
};

const SOCIAL_RECOVERY: ModuleConfig = ModuleConfig {
    dir: "safe-recovery-module",
    contract_name: "SocialRecoveryModule",
    json_file: "social-recovery-module.json",
    supported_versions: &["0.1.0"],
};

impl ModuleKind {
    pub const ALL: [ModuleKind; 2] = [ModuleKind::Allowance, ModuleKind::SocialRecovery];

    /// Storage layout and version allowlist for this module.
    pub fn config(&self) -> &'static ModuleConfig {
        match self {
            ModuleKind::Allowance => &ALLOWANCE,
            ModuleKind::SocialRecovery => &SOCIAL_RECOVERY,
        }
    }
}

impl FromStr for ModuleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "allowance" => Ok(ModuleKind::Allowance),
            "social-recovery" => Ok(ModuleKind::SocialRecovery),
            other => {
                let valid = ModuleKind::ALL
                    .map(|kind| kind.to_string())
                    .join(", ");
                Err(anyhow!(
                    "Unknown module_type: \"{}\". Valid options: {}",
                    other,
                    valid
                ))
            }
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModuleKind::Allowance => "allowance",
            ModuleKind::SocialRecovery => "social-recovery",
        };
        f.write_str(name)
    }
}
