//! Message types for koda's conversation history.
//!
//! Provides a structured [`Message`] type with [`Role`] and [`ContentBlock`]
//! enums that represent conversation turns. The serde shape matches the
//! Anthropic Messages wire format exactly, so history entries are re-sent
//! verbatim on every request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single message in a conversation.
///
/// The conversation is an append-only `Vec<Message>` owned by the agent.
/// A `User` message consisting solely of tool results always directly
/// follows the `Assistant` message that requested those tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentBlock>,
}

/// The role of a message sender in the conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One block of message content.
///
/// The `type` tag and field names follow the Anthropic Messages API:
/// `text`, `tool_use`, and `tool_result` blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        /// Unique identifier for this tool call (used to match results).
        id: String,
        /// Name of the tool to invoke.
        name: String,
        /// JSON arguments to pass to the tool.
        input: Value,
    },
    ToolResult {
        tool_use_id: String,
        content: String,
        #[serde(default)]
        is_error: bool,
    },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    // Constructor for API completeness; responses build these via serde
    #[allow(dead_code)]
    pub fn tool_use(id: impl Into<String>, name: impl Into<String>, input: Value) -> Self {
        Self::ToolUse {
            id: id.into(),
            name: name.into(),
            input,
        }
    }

    pub fn tool_result(
        tool_use_id: impl Into<String>,
        content: impl Into<String>,
        is_error: bool,
    ) -> Self {
        Self::ToolResult {
            tool_use_id: tool_use_id.into(),
            content: content.into(),
            is_error,
        }
    }
}

impl Message {
    /// Creates a plain-text user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::text(text)],
        }
    }

    /// Creates an assistant message from the model's response blocks.
    pub fn assistant(content: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::Assistant,
            content,
        }
    }

    /// Creates the user message that carries tool results back to the model.
    ///
    /// The API expects tool results under the `user` role; think of it as
    /// the operator's system reporting back on the model's requests.
    pub fn tool_results(results: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::User,
            content: results,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "you"),
            Role::Assistant => write!(f, "koda"),
        }
    }
}
