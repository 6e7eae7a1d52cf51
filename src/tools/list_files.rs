//! List-files tool — recursive directory listing with deterministic order.

use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path;
use walkdir::WalkDir;

use super::Tool;
use crate::error::ToolError;

/// Tool that recursively lists the files and directories under a path.
///
/// Entry names are relative to the listed root; directories carry a
/// trailing `/` so the model can tell them apart from files. The walk is
/// sorted by file name at each level, so the output is stable for a given
/// filesystem state.
pub struct ListFilesTool;

impl ListFilesTool {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Deserialize)]
struct ListFilesInput {
    #[serde(default)]
    path: Option<String>,
}

#[async_trait::async_trait]
impl Tool for ListFilesTool {
    fn name(&self) -> &str {
        "list_files"
    }

    fn description(&self) -> &str {
        "List files and directories at a given path. If no path is provided, \
         lists files in the current directory."
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Optional relative path to list files from. \
                                    Defaults to current directory if not provided."
                }
            },
            "required": []
        })
    }

    async fn execute(&self, input: Value) -> Result<String, ToolError> {
        let input: ListFilesInput = serde_json::from_value(input)?;
        let dir = input.path.filter(|p| !p.is_empty()).unwrap_or_else(|| ".".into());

        let root = Path::new(&dir);
        if !root.exists() {
            return Err(ToolError::NotFound(dir));
        }
        if !root.is_dir() {
            return Err(ToolError::NotADirectory(dir));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                ToolError::Io(e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::other("walk failed")
                }))
            })?;
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .into_owned();
            if entry.file_type().is_dir() {
                entries.push(format!("{}/", rel));
            } else {
                entries.push(rel);
            }
        }

        // JSON keeps the listing unambiguous for the model.
        Ok(serde_json::to_string_pretty(&entries)?)
    }
}
