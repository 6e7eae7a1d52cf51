//! Environment variable substitution and API key resolution.

use super::types::Config;

impl Config {
    /// Resolve {env:VAR_NAME} patterns in string fields.
    pub(super) fn resolve_substitutions(&mut self) {
        self.model = Self::resolve_str(&self.model);
        if let Some(ref mut sp) = self.system_prompt {
            *sp = Self::resolve_str(sp);
        }
        if let Some(ref mut entry) = self.anthropic {
            if let Some(ref mut key) = entry.api_key {
                *key = Self::resolve_str(key);
            }
            if let Some(ref mut url) = entry.base_url {
                *url = Self::resolve_str(url);
            }
        }
    }

    /// Replace {env:VAR} with the environment variable value.
    fn resolve_str(s: &str) -> String {
        let mut result = s.to_string();
        while let Some(start) = result.find("{env:") {
            if let Some(end) = result[start..].find('}') {
                let var_name = &result[start + 5..start + end];
                let value = std::env::var(var_name).unwrap_or_default();
                result = format!(
                    "{}{}{}",
                    &result[..start],
                    value,
                    &result[start + end + 1..]
                );
            } else {
                break;
            }
        }
        result
    }

    /// Resolve the API key: env var first, then config value.
    ///
    /// Returns `None` when no non-empty key is available anywhere; the CLI
    /// treats that as a fatal startup error.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Ok(val) = std::env::var("ANTHROPIC_API_KEY") {
            let val = val.trim().to_string();
            if !val.is_empty() {
                return Some(val);
            }
        }

        self.anthropic
            .as_ref()
            .and_then(|e| e.api_key.as_deref())
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    /// Custom base URL for the provider API, if configured.
    pub fn base_url(&self) -> Option<&str> {
        self.anthropic.as_ref().and_then(|e| e.base_url.as_deref())
    }

    /// Maximum tokens per completion, falling back to the built-in default.
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(crate::constants::MAX_TOKENS)
    }
}
