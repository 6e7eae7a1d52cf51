//! Error taxonomies for tool execution and the model provider boundary.
//!
//! Tool errors are never propagated through the conversation loop: the agent
//! converts every [`ToolError`] into an `is_error` tool result that is fed
//! back to the model. [`ProviderError`] is the only error the loop itself
//! handles, by abandoning the current turn.

use thiserror::Error;

/// Failure modes of a tool handler.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A required parameter is missing, empty, or otherwise unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The target file or directory does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The path names a directory where a file was expected.
    #[error("{0} is a directory, not a file")]
    IsADirectory(String),

    /// The path names a file where a directory was expected.
    #[error("{0} is not a directory")]
    NotADirectory(String),

    /// The model requested a tool name that was never registered.
    #[error("tool '{0}' is not registered")]
    NotRegistered(String),

    /// The model supplied arguments that don't match the tool's schema.
    #[error("bad tool arguments: {0}")]
    BadArguments(#[from] serde_json::Error),

    /// Any other filesystem failure (permissions, encoding, etc.).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failure modes of a model completion request.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("malformed API response: {0}")]
    Parse(#[from] serde_json::Error),
}
