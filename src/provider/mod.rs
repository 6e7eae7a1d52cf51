//! Model provider boundary.
//!
//! The conversation loop talks to the model through the [`ModelClient`]
//! trait, keeping wire details out of the agent. [`AnthropicClient`] is the
//! production implementation; tests script their own.

mod client;

pub use client::AnthropicClient;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::message::{ContentBlock, Message};
use crate::tools::ToolDefinition;

/// A model response: an ordered sequence of content blocks.
///
/// Blocks are appended to history verbatim, so order must be preserved.
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub content: Vec<ContentBlock>,
}

/// Chat-completion capability the loop depends on.
///
/// The full conversation history plus the tool definitions are sent on
/// every call; the provider is stateless.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<ModelResponse, ProviderError>;
}
