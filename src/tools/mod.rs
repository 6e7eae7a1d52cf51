pub mod edit_file;
pub mod list_files;
pub mod read_file;

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::error::ToolError;

use edit_file::EditFileTool;
use list_files::ListFilesTool;
use read_file::ReadFileTool;

/// Definition sent to the LLM so it knows what tools are available.
///
/// Serializes to the Anthropic `tools` array shape. Descriptions and
/// schemas are passed through verbatim; they are data, not executable.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value, // JSON Schema
}

/// Every tool implements this trait.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Unique name the LLM uses to call this tool.
    fn name(&self) -> &str;

    /// Human-readable description the LLM reads to decide when to call it.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's input parameters.
    fn schema(&self) -> Value;

    /// Execute the tool with the given JSON input.
    async fn execute(&self, input: Value) -> Result<String, ToolError>;
}

/// Holds all registered tools and resolves calls by name.
///
/// Name uniqueness is not enforced: registering a duplicate name shadows
/// the earlier tool, since lookup scans newest-first.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool. Called during startup.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.push(Arc::from(tool));
    }

    /// Look up a tool by name. Returns `None` for unregistered names;
    /// the agent turns that into an error tool result, not a failure.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().rev().find(|t| t.name() == name).cloned()
    }

    /// Produce definitions for the LLM (sent in the API request).
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.schema(),
            })
            .collect()
    }

    /// How many tools are registered.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl ToolRegistry {
    /// Create a registry with all built-in tools.
    ///
    /// Paths are interpreted relative to the process working directory;
    /// no confinement is applied.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ReadFileTool::new()));
        registry.register(Box::new(ListFilesTool::new()));
        registry.register(Box::new(EditFileTool::new()));
        registry
    }
}

#[cfg(test)]
mod tests;
