//! Write path of the module registry.
//!
//! A [`RegistryStore`] holds one pretty-printed JSON document per
//! `(module, version)` under a fixed assets root. [`update_registry`] merges
//! a new `(chain id, address)` observation into the stored record:
//! validate, load, [`apply_address`], persist. Every validation failure
//! aborts before anything is written; a missing document is an error, never
//! silently created.
//!
//! Updates are a plain read-modify-write with no document-level locking;
//! callers racing on the same `(module, version)` must serialize themselves
//! (in practice: CI pipeline mutual exclusion).

pub mod config;
pub mod paths;
pub mod store;
pub mod update;

pub use config::{ModuleConfig, ModuleKind};
pub use store::RegistryStore;
pub use update::{apply_address, update_registry, ChangeKind, UpdateOutcome};
