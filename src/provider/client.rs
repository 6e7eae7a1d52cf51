//! Anthropic Messages API client.
//!
//! A thin, non-streaming [`reqwest`] wrapper around `POST /v1/messages`.
//! Koda's [`Message`] and [`ContentBlock`](crate::message::ContentBlock)
//! types serialize to the wire format directly, so requests embed the
//! conversation history without translation.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::{ModelClient, ModelResponse};
use crate::error::ProviderError;
use crate::message::Message;
use crate::tools::ToolDefinition;

/// A configured Anthropic client ready to handle completion requests.
pub struct AnthropicClient {
    http: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    system_prompt: Option<String>,
    messages_url: String,
}

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    tools: &'a [ToolDefinition],
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    content: Vec<crate::message::ContentBlock>,
}

impl AnthropicClient {
    /// Creates a client for the given credentials and model.
    ///
    /// `base_url` overrides the default API endpoint (useful for proxies);
    /// the `/v1/messages` path is appended either way.
    pub fn new(
        api_key: String,
        model: String,
        max_tokens: u32,
        system_prompt: Option<String>,
        base_url: Option<&str>,
    ) -> Self {
        let base = base_url
            .unwrap_or(crate::constants::ANTHROPIC_BASE_URL)
            .trim_end_matches('/');
        Self {
            http: Client::new(),
            api_key,
            model,
            max_tokens,
            system_prompt,
            messages_url: format!("{}/v1/messages", base),
        }
    }

    /// Extract a human-readable message from an API error body.
    ///
    /// Error bodies look like `{"error": {"type": ..., "message": ...}}`;
    /// fall back to the raw body when they don't.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| body.to_string())
    }
}

#[async_trait]
impl ModelClient for AnthropicClient {
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<ModelResponse, ProviderError> {
        let request = ApiRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: self.system_prompt.as_deref(),
            messages,
            tools,
        };

        let response = self
            .http
            .post(&self.messages_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", crate::constants::ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: Self::error_message(&body),
            });
        }

        let parsed: ApiResponse = serde_json::from_str(&body)?;
        Ok(ModelResponse {
            content: parsed.content,
        })
    }
}
