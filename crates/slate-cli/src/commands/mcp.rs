// Rust guideline compliant 2026-08-29

//! Implementation of the `slate mcp` command.

use anyhow::Result;
use slate_app::RepoContext;
use slate_mcp::McpOptions;

/// Runs the MCP server over stdio until the client disconnects.
///
/// # Arguments
///
/// * `read_only` - Refuse mutating tools
/// * `log_file` - Optional log file path; stderr when absent
/// * `log_level` - Log level filter
///
/// # Errors
///
/// Returns an error if the repository is not initialized or the server
/// fails to start.
pub fn execute(read_only: bool, log_file: Option<String>, log_level: String) -> Result<()> {
    let ctx = RepoContext::discover(None)?;
    slate_mcp::run(McpOptions {
        repo: ctx,
        read_only,
        log_file,
        log_level,
    })?;
    Ok(())
}
