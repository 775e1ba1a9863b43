// Rust guideline compliant 2026-08-28

//! Shared application services for Slate.
//!
//! This crate provides reusable, non-CLI-specific helpers for repository
//! discovery, the store handle, list filtering, PRD intake, task
//! expansion, file scaffolding, and standardized response envelopes.

pub mod error;
pub mod expand;
pub mod generator;
pub mod intake;
pub mod list;
pub mod repo;
pub mod response;
pub mod scaffold;
pub mod store;

pub use error::{AppError, ErrorCode, Result};
pub use expand::expand_task;
pub use generator::TaskGenerator;
pub use intake::{parse_prd, IntakeSummary};
pub use list::{list_tasks, parse_priority, parse_status, ListOptions};
pub use repo::RepoContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use scaffold::{sanitize_filename, scaffold_task, DEFAULT_OUTPUT_DIR};
pub use store::Store;
