// Rust guideline compliant 2026-08-29

//! Implementation of the `slate expand` command.

use crate::terminal::print_success;
use anyhow::Result;
use slate_ai::AiClient;
use slate_app::{expand_task, RepoContext, Store};

/// Expands a task into AI-generated subtasks.
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - `SLATE_AI_API_KEY` is not configured
/// - The task cannot be expanded or generation fails
pub fn execute(id: &str) -> Result<()> {
    let ctx = RepoContext::discover(None)?;
    let config = ctx.load_config()?;
    let mut store = Store::open(&ctx)?;
    let client = AiClient::from_env()?;

    let added = expand_task(&mut store, &client, id, config.default_subtasks)?;
    print_success(&format!("Added {} subtasks to task {}", added, id));
    Ok(())
}
