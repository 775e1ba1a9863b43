// Rust guideline compliant 2026-08-29

//! Implementation of the `slate init` command.
//!
//! Creates the `.slate` directory with an empty tasks document and a
//! default configuration file.

use crate::terminal::print_success;
use anyhow::Result;
use slate_app::RepoContext;

/// Initializes a Slate repository in the current directory.
///
/// # Errors
///
/// Returns an error if the directory or files cannot be created.
pub fn execute() -> Result<()> {
    let ctx = RepoContext::init(None)?;
    print_success(&format!(
        "Initialized Slate repository at {}",
        ctx.slate_dir().display()
    ));
    Ok(())
}
