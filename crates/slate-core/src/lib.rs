// Rust guideline compliant 2026-08-28

//! Slate Core Library
//!
//! This crate provides the foundational components for the Slate task tracking system:
//! - Data models (Task, Subtask, DepRef, Status, Priority)
//! - Storage engine (whole-document JSON read/write, atomic replace, locking)
//! - Graph algorithms (dependency graph, cycle detection with witness paths)
//! - Status transitions with parent/child propagation and history
//! - Identifier parsing and resolution (`"3"` and `"3.2"` forms)
//! - Scheduling (next eligible task), complexity scoring, markdown reports
//! - Error types and result handling

pub mod complexity;
pub mod config;
pub mod error;
pub mod fsm;
pub mod graph;
pub mod history;
pub mod ids;
pub mod models;
pub mod next;
pub mod ops;
pub mod report;
pub mod storage;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use fsm::set_status;
pub use graph::{find_cycle, DepGraph};
pub use history::{History, StatusChange};
pub use ids::{find_item, find_item_mut, find_ref, find_task, find_task_mut, parse_id, ItemMut, ItemRef};
pub use models::{DepRef, Meta, Priority, Status, Subtask, Task, TaskData};
pub use next::{find_next, NextPick};
pub use ops::{add_subtask, add_task, filter_dependencies, remove_item, remove_subtask, NewItem};
pub use storage::Storage;
