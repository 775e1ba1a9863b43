// Rust guideline compliant 2026-08-29

//! Standardized prompts for task generation and expansion.

/// Structure guide appended to the task generation prompt. The shape
/// mirrors the persisted tasks document exactly.
const TASKS_STRUCTURE_GUIDE: &str = r#"The output MUST be a valid JSON object with the following structure:
{
  "meta": {
    "projectName": "string (extracted or inferred from the PRD)",
    "version": "string (e.g. '1.0')"
  },
  "tasks": [
    {
      "id": 1,
      "title": "string (concise task title)",
      "description": "string or null",
      "status": "pending",
      "priority": "high, medium, or low (inferred)",
      "dependencies": [1, "2.1"],
      "details": "string or null",
      "testStrategy": "string or null",
      "subtasks": [
        {
          "id": 1,
          "title": "string (concise subtask title)",
          "description": "string or null",
          "status": "pending",
          "dependencies": [1],
          "details": "string or null"
        }
      ]
    }
  ]
}

- Generate sequential task ids starting from 1, and sequential subtask ids starting from 1 within each parent.
- Infer dependencies from the PRD flow. Use integer ids for tasks and "parent.subtask" strings for subtask dependencies.
- Infer priority from the importance stated or implied in the PRD.
- Keep descriptions concise but informative, and provide a test strategy where applicable.
- Output ONLY the JSON object, with no introductory text or explanations."#;

/// Structure guide appended to the expansion prompt.
const SUBTASKS_STRUCTURE_GUIDE: &str = r#"The output MUST be a valid JSON list of subtask objects:
[
  {
    "title": "string (concise subtask title)",
    "description": "string or null",
    "dependencies": [1],
    "details": "string or null"
  }
]

- Break the task down into logical, actionable steps.
- Infer dependencies only between the generated subtasks, using each subtask's 1-based position in this list as its id.
- Keep titles and descriptions focused.
- Output ONLY the JSON list, with no introductory text or explanations."#;

/// Builds the prompt for generating a task document from a PRD.
#[must_use]
pub fn generate_tasks_prompt(prd_content: &str) -> String {
    format!(
        "Analyze the following Product Requirements Document (PRD) and generate a detailed, \
         structured list of tasks required to implement the features described.\n\n\
         **PRD Content:**\n```\n{}\n```\n\n**Instructions:**\n{}",
        prd_content, TASKS_STRUCTURE_GUIDE
    )
}

/// Builds the prompt for expanding a task into subtasks.
#[must_use]
pub fn expand_task_prompt(title: &str, description: Option<&str>, context: &str) -> String {
    format!(
        "Break down the following main task into smaller, actionable subtasks based on the \
         provided context.\n\n\
         **Main Task Title:** {}\n**Main Task Description:** {}\n\n\
         **Context:**\n```\n{}\n```\n\n**Instructions:**\n{}",
        title,
        description.unwrap_or("N/A"),
        context,
        SUBTASKS_STRUCTURE_GUIDE
    )
}

/// Extracts the first JSON object or list from surrounding model prose.
///
/// Models sometimes wrap the payload in explanation or code fences. The
/// payload is taken from the first opening brace or bracket (whichever
/// comes first) to the matching last closing one.
#[must_use]
pub fn extract_json_payload(text: &str) -> Option<&str> {
    let obj_start = text.find('{');
    let list_start = text.find('[');

    let (start, open, close) = match (obj_start, list_start) {
        (Some(o), Some(l)) if l < o => (l, '[', ']'),
        (Some(o), _) => (o, '{', '}'),
        (None, Some(l)) => (l, '[', ']'),
        (None, None) => return None,
    };
    let _ = open;

    let end = text.rfind(close)?;
    if end <= start {
        return None;
    }
    Some(text[start..=end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_object_payload() {
        let text = "Here you go:\n```json\n{\"tasks\": []}\n```\nDone.";
        assert_eq!(extract_json_payload(text), Some("{\"tasks\": []}"));
    }

    #[test]
    fn test_extract_list_payload() {
        let text = "Sure: [{\"title\": \"a\"}] hope that helps";
        assert_eq!(extract_json_payload(text), Some("[{\"title\": \"a\"}]"));
    }

    #[test]
    fn test_list_before_object_wins() {
        let text = "[{\"title\": \"a\"}]";
        assert_eq!(extract_json_payload(text), Some("[{\"title\": \"a\"}]"));
    }

    #[test]
    fn test_no_payload() {
        assert_eq!(extract_json_payload("no json here"), None);
        assert_eq!(extract_json_payload("} backwards {"), None);
    }

    #[test]
    fn test_prompts_carry_input() {
        let prompt = generate_tasks_prompt("Build a parser");
        assert!(prompt.contains("Build a parser"));
        assert!(prompt.contains("projectName"));

        let prompt = expand_task_prompt("Title", None, "ctx");
        assert!(prompt.contains("N/A"));
        assert!(prompt.contains("ctx"));
    }
}
