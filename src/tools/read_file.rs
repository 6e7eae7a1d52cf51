//! Read-file tool — returns the full UTF-8 contents of a file.

use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path;

use super::Tool;
use crate::error::ToolError;

/// Tool that reads a file in full.
///
/// No size limit or streaming: large files are read whole, matching the
/// read-everything contract the model relies on.
pub struct ReadFileTool;

impl ReadFileTool {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Deserialize)]
struct ReadFileInput {
    #[serde(default)]
    path: String,
}

#[async_trait::async_trait]
impl Tool for ReadFileTool {
    fn name(&self) -> &str {
        "read_file"
    }

    fn description(&self) -> &str {
        "Read the contents of a given relative file path. Use this when you \
         want to see what's inside a file. Do not use this with directory names."
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "The relative path of a file in the working directory."
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, input: Value) -> Result<String, ToolError> {
        let input: ReadFileInput = serde_json::from_value(input)?;
        if input.path.is_empty() {
            return Err(ToolError::InvalidArgument("no file path provided".into()));
        }

        let path = Path::new(&input.path);
        if !path.exists() {
            return Err(ToolError::NotFound(input.path));
        }
        if path.is_dir() {
            return Err(ToolError::IsADirectory(input.path));
        }

        Ok(std::fs::read_to_string(path)?)
    }
}
