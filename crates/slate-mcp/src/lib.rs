// Rust guideline compliant 2026-08-29

//! Stdio MCP server exposing the Slate task collection to agents.

mod server;
mod types;

pub use server::{run, McpOptions, McpServerError};
