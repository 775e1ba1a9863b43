// Rust guideline compliant 2026-08-29

//! Output formatting module for the Slate CLI.
//!
//! This module provides functionality for formatting task data
//! in various output formats (JSON, table, plain text).

use crate::terminal::wrap_text;
use serde_json::json;
use slate_core::Task;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn deps_column(task: &Task) -> String {
    if task.dependencies.is_empty() {
        "-".to_string()
    } else {
        task.dependencies
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Output formatter trait.
///
/// Defines the interface for formatting task data in different output formats.
pub trait OutputFormatter {
    /// Formats a single task for display.
    ///
    /// # Arguments
    /// * `task` - The task to format
    ///
    /// # Returns
    /// A formatted string representation of the task
    fn format_task(&self, task: &Task) -> String;

    /// Formats a list of tasks for display.
    ///
    /// # Arguments
    /// * `tasks` - The tasks to format
    ///
    /// # Returns
    /// A formatted string representation of the task list
    fn format_list(&self, tasks: &[Task]) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats tasks as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_task(&self, task: &Task) -> String {
        serde_json::to_string_pretty(task)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize task" }).to_string())
    }

    fn format_list(&self, tasks: &[Task]) -> String {
        let output = json!({
            "tasks": tasks,
            "total": tasks.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize task list" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats tasks as human-readable tables with colors and alignment.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    ///
    /// # Returns
    /// A new TableFormatter instance
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_task(&self, task: &Task) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", task.id));
        output.push_str(&format!("Title:       {}\n", task.title));
        output.push_str(&format!("Status:      {}\n", task.status));
        output.push_str(&format!("Priority:    {}\n", task.priority));
        output.push_str(&format!("Dependencies: {}\n", deps_column(task)));

        if let Some(description) = &task.description {
            output.push_str(&format!("Description: {}\n", wrap_text(description, 13)));
        }
        if let Some(details) = &task.details {
            output.push_str(&format!("Details:     {}\n", wrap_text(details, 13)));
        }
        if let Some(strategy) = &task.test_strategy {
            output.push_str(&format!("Test:        {}\n", wrap_text(strategy, 13)));
        }

        if !task.subtasks.is_empty() {
            output.push_str("Subtasks:\n");
            for sub in &task.subtasks {
                output.push_str(&format!(
                    "  {}.{} [{}] {}\n",
                    task.id, sub.id, sub.status, sub.title
                ));
            }
        }

        output
    }

    fn format_list(&self, tasks: &[Task]) -> String {
        if tasks.is_empty() {
            return "No tasks found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Status", "Priority", "Title", "Deps", "Subtasks"]);

        for task in tasks {
            builder.push_record(vec![
                task.id.to_string(),
                task.status.to_string(),
                task.priority.to_string(),
                task.title.clone(),
                deps_column(task),
                task.subtasks.len().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            let mut output = Vec::new();
            let mut stderr = StandardStream::stderr(ColorChoice::Auto);
            let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(output, "Error: ");
            let _ = stderr.reset();
            let _ = write!(output, "{}", error);
            String::from_utf8_lossy(&output).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats tasks as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_task(&self, task: &Task) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", task.id));
        output.push_str(&format!("{}\n", task.title));
        output.push_str(&format!("{}\n", task.status));
        output.push_str(&format!("{}\n", task.priority));

        if let Some(description) = &task.description {
            output.push_str(&format!("{}\n", description));
        }

        output
    }

    fn format_list(&self, tasks: &[Task]) -> String {
        if tasks.is_empty() {
            return "No tasks found.".to_string();
        }

        let mut output = String::new();
        for task in tasks {
            output.push_str(&format!(
                "{} {} {} {}\n",
                task.id, task.status, task.priority, task.title
            ));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
