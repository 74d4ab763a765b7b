//! Per-module deployment registries.
//!
//! One getter per known contract, each resolving against a compiled-in
//! deployment list parsed from the asset JSON under `assets/`. The lists are
//! process-wide immutable constants; they must stay sorted from the latest
//! version to the oldest, since the resolver returns the first match.

use crate::find_deployment;
use registry_types::{Deployment, DeploymentFilter};
use std::sync::LazyLock;

fn parse(raw: &str) -> Deployment {
    serde_json::from_str(raw).expect("embedded deployment asset is valid JSON")
}

static ALLOWANCE_MODULE_DEPLOYMENTS: LazyLock<Vec<Deployment>> = LazyLock::new(|| {
    vec![
        parse(include_str!(
            "../assets/allowance-module/v0.1.1/allowance-module.json"
        )),
        parse(include_str!(
            "../assets/allowance-module/v0.1.0/allowance-module.json"
        )),
    ]
});

static SOCIAL_RECOVERY_MODULE_DEPLOYMENTS: LazyLock<Vec<Deployment>> = LazyLock::new(|| {
    vec![parse(include_str!(
        "../assets/safe-recovery-module/v0.1.0/social-recovery-module.json"
    ))]
});

static SAFE_4337_MODULE_DEPLOYMENTS: LazyLock<Vec<Deployment>> = LazyLock::new(|| {
    vec![parse(include_str!(
        "../assets/safe-4337-module/v0.1.0/safe-4337-module.json"
    ))]
});

static ADD_MODULES_LIB_DEPLOYMENTS: LazyLock<Vec<Deployment>> = LazyLock::new(|| {
    vec![parse(include_str!(
        "../assets/safe-4337-module/v0.1.0/add-modules-lib.json"
    ))]
});

static SAFE_WEBAUTHN_SIGNER_FACTORY_DEPLOYMENTS: LazyLock<Vec<Deployment>> =
    LazyLock::new(|| {
        vec![parse(include_str!(
            "../assets/safe-passkey-module/v0.2.0/safe-webauthn-signer-factory.json"
        ))]
    });

static DAIMO_P256_VERIFIER_DEPLOYMENTS: LazyLock<Vec<Deployment>> = LazyLock::new(|| {
    vec![parse(include_str!(
        "../assets/safe-passkey-module/v0.2.0/daimo-p256-verifier.json"
    ))]
});

static FCL_P256_VERIFIER_DEPLOYMENTS: LazyLock<Vec<Deployment>> = LazyLock::new(|| {
    vec![parse(include_str!(
        "../assets/safe-passkey-module/v0.2.0/fcl-p256-verifier.json"
    ))]
});

fn lookup(
    filter: Option<&DeploymentFilter>,
    candidates: &'static [Deployment],
) -> Option<&'static Deployment> {
    let default = DeploymentFilter::default();
    find_deployment(filter.unwrap_or(&default), candidates)
}

/// Resolve the allowance module deployment matching `filter`.
pub fn get_allowance_module_deployment(
    filter: Option<&DeploymentFilter>,
) -> Option<&'static Deployment> {
    lookup(filter, &ALLOWANCE_MODULE_DEPLOYMENTS)
}

/// Resolve the social recovery module deployment matching `filter`.
pub fn get_social_recovery_module_deployment(
    filter: Option<&DeploymentFilter>,
) -> Option<&'static Deployment> {
    lookup(filter, &SOCIAL_RECOVERY_MODULE_DEPLOYMENTS)
}

/// Resolve the Safe 4337 module deployment matching `filter`.
pub fn get_safe_4337_module_deployment(
    filter: Option<&DeploymentFilter>,
) -> Option<&'static Deployment> {
    lookup(filter, &SAFE_4337_MODULE_DEPLOYMENTS)
}

/// Resolve the AddModulesLib deployment matching `filter`.
pub fn get_add_modules_lib_deployment(
    filter: Option<&DeploymentFilter>,
) -> Option<&'static Deployment> {
    lookup(filter, &ADD_MODULES_LIB_DEPLOYMENTS)
}

/// Resolve the Safe WebAuthn signer factory deployment matching `filter`.
pub fn get_safe_webauthn_signer_factory_deployment(
    filter: Option<&DeploymentFilter>,
) -> Option<&'static Deployment> {
    lookup(filter, &SAFE_WEBAUTHN_SIGNER_FACTORY_DEPLOYMENTS)
}

/// Resolve the Daimo P-256 verifier deployment matching `filter`.
pub fn get_daimo_p256_verifier_deployment(
    filter: Option<&DeploymentFilter>,
) -> Option<&'static Deployment> {
    lookup(filter, &DAIMO_P256_VERIFIER_DEPLOYMENTS)
}

/// Resolve the FCL P-256 verifier deployment matching `filter`.
pub fn get_fcl_p256_verifier_deployment(
    filter: Option<&DeploymentFilter>,
) -> Option<&'static Deployment> {
    lookup(filter, &FCL_P256_VERIFIER_DEPLOYMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_types::ChainId;

    #[test]
    fn test_lists_are_sorted_newest_first() {
        for list in [
            &*ALLOWANCE_MODULE_DEPLOYMENTS,
            &*SOCIAL_RECOVERY_MODULE_DEPLOYMENTS,
            &*SAFE_4337_MODULE_DEPLOYMENTS,
            &*ADD_MODULES_LIB_DEPLOYMENTS,
            &*SAFE_WEBAUTHN_SIGNER_FACTORY_DEPLOYMENTS,
            &*DAIMO_P256_VERIFIER_DEPLOYMENTS,
            &*FCL_P256_VERIFIER_DEPLOYMENTS,
        ] {
            assert!(!list.is_empty());
            for pair in list.windows(2) {
                assert!(pair[0].version > pair[1].version, "list not newest-first");
            }
        }
    }

    #[test]
    fn test_allowance_default_skips_draft() {
        // v0.1.1 is unreleased; the unfiltered query returns v0.1.0.
        let found = get_allowance_module_deployment(None).unwrap();
        assert_eq!(found.version, "0.1.0");
        assert_eq!(found.contract_name, "AllowanceModule");
        assert!(found.released);
    }

    #[test]
    fn test_allowance_draft_opt_in() {
        let filter = DeploymentFilter {
            released: Some(false),
            ..Default::default()
        };
        let found = get_allowance_module_deployment(Some(&filter)).unwrap();
        assert_eq!(found.version, "0.1.1");
    }

    #[test]
    fn test_allowance_network_filter() {
        let filter = DeploymentFilter {
            network: Some(ChainId::from(100)),
            ..Default::default()
        };
        assert!(get_allowance_module_deployment(Some(&filter)).is_some());

        let filter = DeploymentFilter {
            network: Some(ChainId::from(2)),
            ..Default::default()
        };
        assert_eq!(get_allowance_module_deployment(Some(&filter)), None);
    }

    #[test]
    fn test_getter_contract_names() {
        let cases: [(&str, Option<&'static Deployment>); 6] = [
            (
                "SocialRecoveryModule",
                get_social_recovery_module_deployment(None),
            ),
            ("Safe4337Module", get_safe_4337_module_deployment(None)),
            ("AddModulesLib", get_add_modules_lib_deployment(None)),
            (
                "SafeWebAuthnSignerFactory",
                get_safe_webauthn_signer_factory_deployment(None),
            ),
            (
                "DaimoP256Verifier",
                get_daimo_p256_verifier_deployment(None),
            ),
            ("FCLP256Verifier", get_fcl_p256_verifier_deployment(None)),
        ];
        for (expected, found) in cases {
            assert_eq!(found.unwrap().contract_name, expected);
        }
    }
}
