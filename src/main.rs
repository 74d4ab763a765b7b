//! Registry update CLI.
//!
//! Merges a deployed contract address into the stored deployment document
//! for one module version:
//!
//! ```bash
//! update-registry --chain-id 11155111 --module allowance --version 0.1.1 \
//!     --address 0xAA46724893dedD72658219405185Fb0Fc91e091C
//! ```
//!
//! Validation failures and I/O errors exit non-zero without touching the
//! document. Inside GitHub Actions the outcome is also appended to
//! `$GITHUB_OUTPUT` / `$GITHUB_STEP_SUMMARY`, and failures emit an
//! `::error::` annotation.

use anyhow::Result;
use clap::Parser;
use registry_store::{update_registry, ModuleKind, RegistryStore};
use registry_types::ChainId;

mod args;
mod ci;

use args::Args;

fn run(args: &Args) -> Result<()> {
    let chain_id: ChainId = args.chain_id.parse()?;
    let module: ModuleKind = args.module.parse()?;

    println!("Updating module registry...");
    println!("   Chain ID: {}", args.chain_id);
    println!("   Module:   {}", args.module);
    println!("   Version:  {}", args.version);
    println!("   Address:  {}", args.address);
    println!();

    let store = RegistryStore::new(&args.assets_root);
    let outcome = update_registry(&store, module, &args.version, chain_id, &args.address)?;

    println!("{}", outcome.message);
    println!("   Asset: {}", outcome.asset_path.display());

    ci::write_outputs(&outcome)?;
    ci::write_step_summary(args, &outcome)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("Error: {:#}", err);
        if ci::in_github_actions() {
            println!("::error::{:#}", err);
        }
        std::process::exit(1);
    }
}
