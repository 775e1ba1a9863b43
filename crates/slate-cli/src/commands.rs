// Rust guideline compliant 2026-08-29

//! CLI command implementations.

pub mod add;
pub mod check;
pub mod expand;
pub mod generate;
pub mod init;
pub mod list;
pub mod mcp;
pub mod next;
pub mod parse_prd;
pub mod remove;
pub mod report;
pub mod show;
pub mod status;
