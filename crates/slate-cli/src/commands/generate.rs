// Rust guideline compliant 2026-08-29

//! Implementation of the `slate generate` command.

use crate::terminal::print_success;
use anyhow::Result;
use slate_app::{scaffold_task, RepoContext, Store};
use slate_core::find_task;
use std::path::Path;

/// Generates a placeholder file from a task's details.
///
/// # Arguments
///
/// * `id` - Task id string (top-level tasks only)
/// * `output_dir` - Optional target directory
///
/// # Errors
///
/// Returns an error if the repository is not initialized, the id does
/// not name a task, or the file cannot be written.
pub fn execute(id: &str, output_dir: Option<&str>) -> Result<()> {
    let ctx = RepoContext::discover(None)?;
    let store = Store::open(&ctx)?;

    let task_id: u32 = id
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid task id '{}'", id))?;
    let Some(task) = find_task(&store.data().tasks, task_id) else {
        anyhow::bail!("No task with id '{}'", id);
    };

    let path = scaffold_task(task, output_dir.map(Path::new))?;
    print_success(&format!("Generated {}", path.display()));
    Ok(())
}
