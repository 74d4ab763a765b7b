//! Versioned registry of Safe module deployment metadata.
//!
//! Query side: one getter per contract, resolving the newest deployment
//! matching an optional filter over a compiled-in, version-descending list.
//! Write side: the `update-registry` binary (backed by `registry-store`)
//! merges newly observed `(chain id, address)` pairs into the stored JSON
//! documents.
//!
//! ```
//! use safe_module_registry::{get_allowance_module_deployment, DeploymentFilter};
//!
//! let deployment = get_allowance_module_deployment(None).expect("released version exists");
//! assert_eq!(deployment.contract_name, "AllowanceModule");
//!
//! // Only resolve versions deployed on Gnosis Chain.
//! let filter = DeploymentFilter {
//!     network: Some("100".parse().unwrap()),
//!     ..Default::default()
//! };
//! assert!(get_allowance_module_deployment(Some(&filter)).is_some());
//! ```

pub use registry_resolver::{
    find_deployment, get_add_modules_lib_deployment, get_allowance_module_deployment,
    get_daimo_p256_verifier_deployment, get_fcl_p256_verifier_deployment,
    get_safe_4337_module_deployment, get_safe_webauthn_signer_factory_deployment,
    get_social_recovery_module_deployment,
};
pub use registry_types::{ChainId, ChecksummedAddress, Deployment, DeploymentFilter};
