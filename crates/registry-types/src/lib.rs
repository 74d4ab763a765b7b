//! Shared types for the safe-module-registry workspace.
//!
//! This crate provides the foundational data model used by both the read
//! path ([`registry-resolver`]) and the write path ([`registry-store`]):
//!
//! - [`ChainId`] - numeric chain identifier, serialized as its decimal string
//! - [`ChecksummedAddress`] - EIP-55 mixed-case address, normalized on parse
//! - [`Deployment`] - one version of one contract's deployment metadata
//! - [`DeploymentFilter`] - query parameters for resolving a deployment
//!
//! [`registry-resolver`]: ../registry_resolver/index.html
//! [`registry-store`]: ../registry_store/index.html

pub mod address;
pub mod chain;
pub mod deployment;

pub use address::ChecksummedAddress;
pub use chain::ChainId;
pub use deployment::{Deployment, DeploymentFilter};
