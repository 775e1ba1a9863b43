// Rust guideline compliant 2026-08-29

//! Implementation of the `slate list` command.

use crate::output::OutputFormatter;
use anyhow::Result;
use slate_app::{list_tasks, parse_priority, parse_status, ListOptions, RepoContext, Store};

/// Lists tasks with optional filters and sorting.
///
/// # Arguments
///
/// * `status` - Optional status filter
/// * `priority` - Optional priority filter
/// * `sort` - Optional sort field
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if the repository is not initialized or a filter
/// value is malformed.
pub fn execute(
    status: Option<String>,
    priority: Option<String>,
    sort: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let ctx = RepoContext::discover(None)?;
    let store = Store::open(&ctx)?;

    let options = ListOptions {
        status: status.as_deref().map(parse_status).transpose()?,
        priority: priority.as_deref().map(parse_priority).transpose()?,
        sort,
    };

    let tasks = list_tasks(store.data().tasks.clone(), &options);
    println!("{}", formatter.format_list(&tasks));
    Ok(())
}
