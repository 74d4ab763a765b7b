//! Read-path resolution of module deployments.
//!
//! [`find_deployment`] selects at most one record from a candidate list;
//! [`modules`] wraps it in one getter per known contract, each backed by a
//! compiled-in deployment list.
//!
//! ## Example
//!
//! ```
//! use registry_resolver::get_allowance_module_deployment;
//! use registry_types::DeploymentFilter;
//!
//! // Newest released version, any network.
//! let newest = get_allowance_module_deployment(None).unwrap();
//! assert_eq!(newest.contract_name, "AllowanceModule");
//!
//! // Constrain to a specific chain.
//! let filter = DeploymentFilter {
//!     network: Some("100".parse().unwrap()),
//!     ..Default::default()
//! };
//! assert!(get_allowance_module_deployment(Some(&filter)).is_some());
//! ```

pub mod modules;

pub use modules::{
    get_add_modules_lib_deployment, get_allowance_module_deployment,
    get_daimo_p256_verifier_deployment, get_fcl_p256_verifier_deployment,
    get_safe_4337_module_deployment, get_safe_webauthn_signer_factory_deployment,
    get_social_recovery_module_deployment,
};

use registry_types::{Deployment, DeploymentFilter};

/// Return the first candidate satisfying every supplied predicate.
///
/// Precondition: `candidates` is sorted newest version first. Because of
/// that order the first match is deterministically the newest version
/// satisfying the filter; this function does not re-sort.
///
/// An unset `released` filter defaults to `true`, so unreleased drafts are
/// only returned when a caller opts in with `released: Some(false)`. No
/// match is an expected outcome, not an error.
pub fn find_deployment<'a>(
    filter: &DeploymentFilter,
    candidates: &'a [Deployment],
) -> Option<&'a Deployment> {
    let released = filter.released.unwrap_or(true);
    candidates.iter().find(|record| {
        if record.released != released {
            return false;
        }
        if let Some(version) = &filter.version {
            if &record.version != version {
                return false;
            }
        }
        if let Some(network) = filter.network {
            if !record.network_addresses.contains_key(&network) {
                return false;
            }
        }
        true
    })
}
