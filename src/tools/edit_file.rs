//! Edit-file tool — string-replacement edits and file creation.

use serde::Deserialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use super::Tool;
use crate::error::ToolError;

/// Tool that edits a file by exact string replacement, or creates it.
///
/// Replace mode rewrites the whole file with every occurrence of `old_str`
/// replaced. Create mode (empty `old_str`, missing file) writes `new_str`
/// as the file's content, creating parent directories as needed. A no-op
/// edit (`old_str == new_str`) is rejected as a usage error rather than
/// silently ignored.
pub struct EditFileTool;

impl EditFileTool {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Deserialize)]
struct EditFileInput {
    #[serde(default)]
    path: String,
    #[serde(default)]
    old_str: String,
    #[serde(default)]
    new_str: String,
}

#[async_trait::async_trait]
impl Tool for EditFileTool {
    fn name(&self) -> &str {
        "edit_file"
    }

    fn description(&self) -> &str {
        "Make edits to a text file. Replaces 'old_str' with 'new_str' in the \
         given file. 'old_str' and 'new_str' MUST be different from each other. \
         If the file specified with path doesn't exist and 'old_str' is empty, \
         it will be created with 'new_str' as its content."
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "The path to the file"
                },
                "old_str": {
                    "type": "string",
                    "description": "Text to search for - must match exactly"
                },
                "new_str": {
                    "type": "string",
                    "description": "Text to replace old_str with"
                }
            },
            "required": ["path", "old_str", "new_str"]
        })
    }

    async fn execute(&self, input: Value) -> Result<String, ToolError> {
        let input: EditFileInput = serde_json::from_value(input)?;
        if input.path.is_empty() {
            return Err(ToolError::InvalidArgument("no file path provided".into()));
        }
        if input.old_str == input.new_str {
            return Err(ToolError::InvalidArgument(
                "old_str and new_str must be different".into(),
            ));
        }

        let path = Path::new(&input.path);

        if !path.exists() {
            if input.old_str.is_empty() {
                return create_new_file(path, &input.new_str);
            }
            return Err(ToolError::NotFound(input.path));
        }

        let content = fs::read_to_string(path)?;
        if !content.contains(&input.old_str) {
            return Err(ToolError::InvalidArgument(format!(
                "old_str not found in {}",
                input.path
            )));
        }

        // Replaces ALL occurrences; whole-file rewrite, last writer wins.
        let new_content = content.replace(&input.old_str, &input.new_str);
        fs::write(path, &new_content)?;

        Ok("OK".to_string())
    }
}

/// Create a new file with the given content, including parent directories.
///
/// The confirmation string is deliberately distinct from the plain "OK"
/// success marker so the model can tell creation from modification.
fn create_new_file(path: &Path, content: &str) -> Result<String, ToolError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(format!("Successfully created file {}", path.display()))
}
