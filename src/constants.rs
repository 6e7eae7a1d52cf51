//! Centralized constants for koda.
//!
//! All magic numbers, default strings, and configuration constants live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "koda";

/// Default LLM model identifier.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Maximum tokens for LLM completions.
pub const MAX_TOKENS: u32 = 1024;

/// Default base URL for the Anthropic API.
pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Anthropic API version header value.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = "koda.toml";

/// Readline history filename.
pub const HISTORY_FILENAME: &str = "chat_history.txt";

/// Default system prompt prepended to all conversations.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are koda, a code-editing assistant in the terminal. \
You can read files, list directories, and edit files in the user's \
working directory. Be concise.";
