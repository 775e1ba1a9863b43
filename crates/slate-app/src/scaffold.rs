// Rust guideline compliant 2026-08-28

//! Placeholder file generation from task details.

use crate::error::Result;
use slate_core::Task;
use std::path::{Path, PathBuf};

/// Default directory for generated files.
pub const DEFAULT_OUTPUT_DIR: &str = "generated_files";

/// Removes characters unsuitable for filenames and caps the length.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();
    cleaned.chars().take(100).collect()
}

/// Generates a placeholder file for a task.
///
/// The extension is guessed from the title: `.py` when it mentions a
/// script, `.md` otherwise. The file carries the task's id, title,
/// description, and details as a starting point.
///
/// # Arguments
///
/// * `task` - The task to scaffold
/// * `output_dir` - Target directory; defaults to [`DEFAULT_OUTPUT_DIR`]
///
/// # Returns
///
/// The path of the generated file.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created.
pub fn scaffold_task(task: &Task, output_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let lowered = task.title.to_lowercase();
    let extension = if lowered.contains("python") || lowered.contains("script") {
        ".py"
    } else {
        ".md"
    };
    let filename = format!(
        "task_{}_{}{}",
        task.id,
        sanitize_filename(&task.title),
        extension
    );
    let filepath = dir.join(filename);

    let mut content = format!("# Task ID: {}\n# Title: {}\n\n", task.id, task.title);
    if let Some(description) = &task.description {
        content.push_str(&format!("## Description\n{}\n\n", description));
    }
    if let Some(details) = &task.details {
        content.push_str(&format!("## Details\n{}\n\n", details));
    }
    content.push_str("# TODO: Implement task logic here\n");

    std::fs::create_dir_all(&dir)?;
    std::fs::write(&filepath, content)?;
    Ok(filepath)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::{Priority, Status};
    use tempfile::TempDir;

    fn sample_task(title: &str) -> Task {
        Task {
            id: 7,
            title: title.to_string(),
            description: Some("Do the thing".to_string()),
            details: None,
            test_strategy: None,
            status: Status::Pending,
            priority: Priority::Medium,
            dependencies: Vec::new(),
            subtasks: Vec::new(),
        }
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("a/b\\c*d?e"), "abcde");
        assert_eq!(sanitize_filename("two words"), "two_words");
        assert_eq!(sanitize_filename(&"x".repeat(200)).len(), 100);
    }

    #[test]
    fn test_scaffold_markdown_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = scaffold_task(&sample_task("Write docs"), Some(temp_dir.path())).unwrap();
        assert_eq!(path.file_name().unwrap(), "task_7_Write_docs.md");
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("# Task ID: 7"));
        assert!(content.contains("## Description"));
    }

    #[test]
    fn test_scaffold_script_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = scaffold_task(&sample_task("Login script"), Some(temp_dir.path())).unwrap();
        assert_eq!(path.extension().unwrap(), "py");
    }
}
