//! Perplexity reply provider.
//!
//! OpenAI-style chat completions endpoint: bearer credential, a
//! system/user message pair, and `choices[0].message.content` on the success
//! path.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::ProviderConfig;
use crate::errors::ProviderError;
use crate::providers::{Provider, ReplyProvider, MAX_REMOTE_INPUT_CHARS};
use crate::utilities::text::truncate_chars;

const API_URL: &str = "https://api.perplexity.ai/chat/completions";

const FALLBACK_REPLY: &str = "I'm here with you, though I couldn't reach Perplexity right now.";

const SYSTEM_INSTRUCTION: &str = "You are a compassionate mental health companion. \
Provide supportive, empathetic responses under 100 words. \
Focus on validation, understanding, and gentle guidance.";

/// Perplexity adapter.
#[derive(Debug)]
pub struct PerplexityProvider {
    client: reqwest::Client,
}

impl PerplexityProvider {
    pub fn new() -> Self {
        PerplexityProvider {
            client: reqwest::Client::new(),
        }
    }

    fn build_request_body(model: &str, text: &str) -> Value {
        json!({
            "model": model,
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTION },
                { "role": "user", "content": truncate_chars(text, MAX_REMOTE_INPUT_CHARS) }
            ],
            "max_tokens": 150,
            "temperature": 0.7
        })
    }

    /// Extract `choices[0].message.content` from a response body.
    fn parse_response(response: &Value) -> Result<String, ProviderError> {
        let content = response
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| ProviderError::Envelope {
                provider: "perplexity",
                detail: "missing choices[0].message.content".to_string(),
            })?;

        let content = content.trim();
        if content.is_empty() {
            return Err(ProviderError::Envelope {
                provider: "perplexity",
                detail: "empty message content".to_string(),
            });
        }
        Ok(content.to_string())
    }
}

impl Default for PerplexityProvider {
    fn default() -> Self {
        PerplexityProvider::new()
    }
}

#[async_trait]
impl ReplyProvider for PerplexityProvider {
    fn provider(&self) -> Provider {
        Provider::Perplexity
    }

    fn fallback_reply(&self) -> &'static str {
        FALLBACK_REPLY
    }

    async fn try_reply(
        &self,
        text: &str,
        config: &ProviderConfig,
    ) -> Result<String, ProviderError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingCredential {
                provider: "perplexity",
            })?;

        let body = Self::build_request_body(&config.model, text);

        let response = self
            .client
            .post(API_URL)
            .header("authorization", format!("Bearer {}", api_key))
            .header("content-type", "application/json")
            .json(&body)
            .timeout(config.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout {
                        provider: "perplexity",
                    }
                } else {
                    ProviderError::Transport {
                        provider: "perplexity",
                        source: e,
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                provider: "perplexity",
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response.json().await.map_err(|e| ProviderError::Envelope {
            provider: "perplexity",
            detail: e.to_string(),
        })?;

        Self::parse_response(&data)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
