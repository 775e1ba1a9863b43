// Rust guideline compliant 2026-08-28

//! Generation seam between application flows and AI backends.

use crate::error::Result;

/// Produces structured task content from natural-language input.
///
/// Implementations return the JSON payload text only; any surrounding
/// prose from the model must already be stripped. The intake and
/// expansion flows parse and validate the payload themselves.
pub trait TaskGenerator {
    /// Generates a whole task document from a requirements document.
    ///
    /// # Arguments
    ///
    /// * `prd` - The requirements document content
    ///
    /// # Returns
    ///
    /// A JSON object string matching the tasks document schema.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or no JSON payload can be
    /// extracted from the response.
    fn generate_tasks(&self, prd: &str) -> Result<String>;

    /// Breaks a task down into subtask drafts.
    ///
    /// # Arguments
    ///
    /// * `title` - Parent task title
    /// * `description` - Parent task description, if any
    /// * `context` - Additional context lines for the model
    ///
    /// # Returns
    ///
    /// A JSON list string of subtask draft objects.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or no JSON payload can be
    /// extracted from the response.
    fn expand_task(&self, title: &str, description: Option<&str>, context: &str) -> Result<String>;
}
