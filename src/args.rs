use clap::Parser;
use std::path::PathBuf;

/// Merge a deployed contract address into a module's registry document.
#[derive(Debug, Parser)]
#[command(
    name = "update-registry",
    author,
    about = "Update the networkAddresses of a module deployment document",
    long_about = "Validates the observation, loads the stored deployment JSON, merges the\n\
                  checksummed address under the chain id, and rewrites the document with\n\
                  chain ids ascending. Safe to re-run: an identical observation is a no-op."
)]
pub struct Args {
    /// Chain ID of the network the contract was deployed to (e.g. 11155111).
    #[arg(long, value_name = "ID")]
    pub chain_id: String,

    /// Module type: allowance, social-recovery.
    #[arg(long, value_name = "TYPE")]
    pub module: String,

    /// Module version to update (e.g. 0.1.1).
    #[arg(long, value_name = "VERSION")]
    pub version: String,

    /// Deployed contract address (0x followed by 40 hex characters).
    #[arg(long, value_name = "ADDRESS")]
    pub address: String,

    /// Root of the deployment asset tree.
    #[arg(
        long,
        value_name = "DIR",
        default_value = "crates/registry-resolver/assets"
    )]
    pub assets_root: PathBuf,
}
