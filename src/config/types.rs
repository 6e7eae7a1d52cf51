//! Struct definitions and serde defaults for koda configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for koda, deserialized from `config.toml`.
///
/// Fields use serde defaults so koda can run with sensible defaults
/// when no config file exists.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Model identifier (e.g. `"claude-sonnet-4-20250514"`).
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum tokens per completion.
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Optional system prompt prepended to all conversations.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: Option<String>,
    /// Anthropic provider settings.
    #[serde(default)]
    pub anthropic: Option<ProviderEntry>,
}

/// Returns the default model identifier.
///
/// Used by serde's `#[serde(default)]` attribute during deserialization.
pub(super) fn default_model() -> String {
    crate::constants::DEFAULT_MODEL.to_string()
}

/// Returns the default system prompt for new conversations.
fn default_system_prompt() -> Option<String> {
    Some(crate::constants::DEFAULT_SYSTEM_PROMPT.to_string())
}

/// Connection details for the model provider.
///
/// Allows overriding the API key and endpoint URL (useful for proxies
/// or gateway deployments).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderEntry {
    /// API key for authentication. Can also be set via `ANTHROPIC_API_KEY`.
    pub api_key: Option<String>,
    /// Custom base URL for the provider's API.
    pub base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: None,
            system_prompt: default_system_prompt(),
            anthropic: None,
        }
    }
}
