//! Deployment records and query filters.

use crate::{ChainId, ChecksummedAddress};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Deployment metadata for one version of one contract.
///
/// Serialized shape matches the on-disk asset JSON (camelCase keys). The
/// `BTreeMap` key ordering guarantees that `networkAddresses` is always
/// written with chain ids ascending numerically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// Whether this version is a production release (as opposed to a draft).
    pub released: bool,
    /// Stable identifier for the contract kind.
    pub contract_name: String,
    /// Semantic version, unique within a module's deployment list.
    pub version: String,
    /// Canonical singleton address, when the contract is deployed
    /// deterministically at the same address everywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_address: Option<ChecksummedAddress>,
    /// Deployed address per chain, keyed by numeric chain id.
    pub network_addresses: BTreeMap<ChainId, ChecksummedAddress>,
    /// Contract ABI, carried through unmodified.
    pub abi: Vec<serde_json::Value>,
}

/// Query parameters for resolving a deployment.
///
/// Every field is optional; an unset `released` constrains to `true` at
/// resolution time, so drafts are only returned when asked for explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeploymentFilter {
    /// Exact version match.
    pub version: Option<String>,
    /// Release-status match.
    pub released: Option<bool>,
    /// Chain the deployment must cover.
    pub network: Option<ChainId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
  "released": true,
  "contractName": "AllowanceModule",
  "version": "0.1.0",
  "networkAddresses": {
    "1": "0xCFbFaC74C26F8647cBDb8c5caf80BB5b32E43134",
    "100": "0xCFbFaC74C26F8647cBDb8c5caf80BB5b32E43134"
  },
  "abi": [{ "type": "fallback" }]
}"#;

    #[test]
    fn test_deserialize_camel_case() {
        let record: Deployment = serde_json::from_str(SAMPLE).unwrap();
        assert!(record.released);
        assert_eq!(record.contract_name, "AllowanceModule");
        assert_eq!(record.version, "0.1.0");
        assert_eq!(record.default_address, None);
        assert_eq!(record.network_addresses.len(), 2);
        assert_eq!(record.abi.len(), 1);
    }

    #[test]
    fn test_network_addresses_serialize_numerically_ascending() {
        let mut record: Deployment = serde_json::from_str(SAMPLE).unwrap();
        let addr = record.network_addresses[&ChainId::from(1)].clone();
        record.network_addresses.insert(ChainId::from(10), addr.clone());
        record.network_addresses.insert(ChainId::from(2), addr);

        let json = serde_json::to_string_pretty(&record).unwrap();
        let one = json.find("\"1\"").unwrap();
        let two = json.find("\"2\"").unwrap();
        let ten = json.find("\"10\"").unwrap();
        let hundred = json.find("\"100\"").unwrap();
        // Lexicographic order would be 1, 10, 100, 2.
        assert!(one < two && two < ten && ten < hundred);
    }

    #[test]
    fn test_round_trip_preserves_record() {
        let record: Deployment = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_string_pretty(&record).unwrap();
        let reloaded: Deployment = serde_json::from_str(&json).unwrap();
        assert_eq!(record, reloaded);
    }
}
