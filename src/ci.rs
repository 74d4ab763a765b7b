//! GitHub Actions output plumbing.
//!
//! Inside a workflow run the release pipeline consumes machine-readable
//! outcome pairs from `$GITHUB_OUTPUT` and shows a summary table from
//! `$GITHUB_STEP_SUMMARY`. Outside CI neither variable is set and these
//! helpers are no-ops.

use anyhow::{Context, Result};
use registry_store::{ChangeKind, UpdateOutcome};
use std::fs::OpenOptions;
use std::io::Write;

use crate::args::Args;

pub fn in_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some()
}

fn append(var: &str, text: &str) -> Result<()> {
    let Some(path) = std::env::var_os(var) else {
        return Ok(());
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open ${} file", var))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("Failed to append to ${} file", var))?;
    Ok(())
}

/// Append outcome key/value pairs for later workflow steps.
pub fn write_outputs(outcome: &UpdateOutcome) -> Result<()> {
    let text = format!(
        "action={}\nhas_changes={}\nasset_path={}\nmessage={}\n",
        outcome.kind,
        outcome.kind != ChangeKind::Unchanged,
        outcome.asset_path.display(),
        outcome.message
    );
    append("GITHUB_OUTPUT", &text)
}

/// Append the markdown property table shown on the workflow run page.
pub fn write_step_summary(args: &Args, outcome: &UpdateOutcome) -> Result<()> {
    let summary = format!(
        "## Module Registry Update\n\n\
         | Property | Value |\n\
         |----------|-------|\n\
         | **Chain ID** | {} |\n\
         | **Module** | {} |\n\
         | **Version** | {} |\n\
         | **Address** | `{}` |\n\
         | **Action** | {} |\n\n",
        args.chain_id, args.module, args.version, args.address, outcome.kind
    );
    append("GITHUB_STEP_SUMMARY", &summary)
}
