// Rust guideline compliant 2026-08-29

//! Implementation of the `slate parse-prd` command.

use crate::terminal::print_success;
use anyhow::Result;
use slate_ai::AiClient;
use slate_app::{parse_prd, RepoContext, Store};
use std::path::Path;

/// Generates tasks from a requirements document and merges them in.
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - `SLATE_AI_API_KEY` is not configured
/// - The PRD file is missing or empty, or generation fails
pub fn execute(path: &str) -> Result<()> {
    let ctx = RepoContext::discover(None)?;
    let mut store = Store::open(&ctx)?;
    let client = AiClient::from_env()?;

    let summary = parse_prd(&mut store, &client, Path::new(path))?;
    print_success(&format!(
        "Added {} tasks, merged {} subtasks from {}",
        summary.added_tasks, summary.merged_subtasks, path
    ));
    Ok(())
}
