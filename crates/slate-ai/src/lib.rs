// Rust guideline compliant 2026-08-29

//! AI backend for Slate.
//!
//! Implements the application layer's `TaskGenerator` seam on top of an
//! OpenAI-compatible chat completions endpoint, with prompt templates
//! and payload extraction for the structured responses the flows expect.

pub mod client;
pub mod prompts;

pub use client::{AiClient, ClientOptions};
pub use prompts::{expand_task_prompt, extract_json_payload, generate_tasks_prompt};
