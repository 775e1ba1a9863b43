// Rust guideline compliant 2026-08-29

//! Implementation of the `slate add` command.
//!
//! Adds a top-level task, or a subtask when `--parent` is given.
//! Dependencies that do not resolve are dropped with a warning rather
//! than failing the command.

use crate::terminal::{print_success, print_warning};
use anyhow::Result;
use slate_app::{parse_priority, RepoContext, Store};
use slate_core::{add_subtask, add_task, parse_id, NewItem};

/// Adds a new task or subtask.
///
/// # Arguments
///
/// * `title` - The item title
/// * `description` - Optional description
/// * `priority` - Optional priority; defaults to the configured value
/// * `depends_on` - Dependency id strings
/// * `parent` - Optional parent task id for a subtask
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - The priority or a dependency id string is malformed
/// - The parent task does not exist
/// - The document cannot be saved
pub fn execute(
    title: String,
    description: Option<String>,
    priority: Option<String>,
    depends_on: Vec<String>,
    parent: Option<u32>,
) -> Result<()> {
    let ctx = RepoContext::discover(None)?;
    let config = ctx.load_config()?;
    let mut store = Store::open(&ctx)?;

    let priority = match priority {
        Some(value) => parse_priority(&value)?,
        None => config.default_priority,
    };

    let mut dependencies = Vec::new();
    for raw in &depends_on {
        match parse_id(raw) {
            Some(dep) => dependencies.push(dep),
            None => anyhow::bail!("Invalid dependency id '{}'", raw),
        }
    }

    let item = NewItem {
        title,
        description,
        priority,
        dependencies,
    };

    let (label, dropped) = match parent {
        Some(parent_id) => {
            let (dep, dropped) = add_subtask(&mut store.data_mut().tasks, parent_id, item)?;
            (dep.to_string(), dropped)
        }
        None => {
            let (id, dropped) = add_task(&mut store.data_mut().tasks, item);
            (id.to_string(), dropped)
        }
    };

    for dep in &dropped {
        print_warning(&format!("Dependency '{}' does not resolve; dropped", dep));
    }

    store.save()?;
    print_success(&format!("Added {}", label));
    Ok(())
}
