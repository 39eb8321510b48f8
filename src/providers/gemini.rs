//! Google Gemini reply provider.
//!
//! The credential rides as a `key` query parameter rather than a header, and
//! the system instruction is folded into the single user prompt part. The
//! success path reads `candidates[0].content.parts[0].text`.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::ProviderConfig;
use crate::errors::ProviderError;
use crate::providers::{Provider, ReplyProvider, MAX_REMOTE_INPUT_CHARS};
use crate::utilities::text::truncate_chars;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const FALLBACK_REPLY: &str = "I'm here with you, though I couldn't reach Gemini right now.";

/// Prompt preamble: empathetic tone, no diagnosis, bounded reply length.
const SYSTEM_INSTRUCTION: &str = "\
You are a compassionate, empathetic mental health companion and active listener. Your role is to:

- Provide emotional support and validation
- Use active listening techniques
- Offer gentle, non-judgmental guidance
- Encourage self-reflection and coping strategies
- Keep responses warm, supportive, and under 150 words
- Never provide medical advice or diagnose
- Focus on the person's feelings and experiences

Respond with empathy, understanding, and genuine care.";

/// Gemini adapter.
#[derive(Debug)]
pub struct GeminiProvider {
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new() -> Self {
        GeminiProvider {
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(model: &str) -> String {
        format!("{API_BASE}/{model}:generateContent")
    }

    /// Single prompt carrying both the instruction and the (truncated) user
    /// text, since Gemini takes one text part here rather than a message
    /// list.
    fn build_prompt(text: &str) -> String {
        let trimmed = truncate_chars(text, MAX_REMOTE_INPUT_CHARS);
        format!("{SYSTEM_INSTRUCTION}\n\nUser message: {trimmed}\n\nYour supportive response:")
    }

    fn build_request_body(text: &str) -> Value {
        json!({
            "contents": [
                { "parts": [{ "text": Self::build_prompt(text) }] }
            ],
            "generationConfig": {
                "temperature": 0.7,
                "maxOutputTokens": 200,
                "topP": 0.8,
                "topK": 40
            }
        })
    }

    /// Extract `candidates[0].content.parts[0].text` from a response body.
    fn parse_response(response: &Value) -> Result<String, ProviderError> {
        let text = response
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| ProviderError::Envelope {
                provider: "gemini",
                detail: "missing candidates[0].content.parts[0].text".to_string(),
            })?;

        let text = text.trim();
        if text.is_empty() {
            // An empty reply would break the non-empty ReplyResult contract.
            return Err(ProviderError::Envelope {
                provider: "gemini",
                detail: "empty candidate text".to_string(),
            });
        }
        Ok(text.to_string())
    }
}

impl Default for GeminiProvider {
    fn default() -> Self {
        GeminiProvider::new()
    }
}

#[async_trait]
impl ReplyProvider for GeminiProvider {
    fn provider(&self) -> Provider {
        Provider::Gemini
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
            .ok_or(ProviderError::MissingCredential { provider: "gemini" })?;

        let body = Self::build_request_body(text);

        let response = self
            .client
            .post(Self::endpoint(&config.model))
            .query(&[("key", api_key)])
            .header("content-type", "application/json")
            .json(&body)
            .timeout(config.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout { provider: "gemini" }
                } else {
                    ProviderError::Transport {
                        provider: "gemini",
                        source: e,
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                provider: "gemini",
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response.json().await.map_err(|e| ProviderError::Envelope {
            provider: "gemini",
            detail: e.to_string(),
        })?;

        let reply = Self::parse_response(&data)?;
        log::debug!(
            "gemini reply generated: {}",
            truncate_chars(&reply, 50),
        );
        Ok(reply)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_includes_model() {
        assert_eq!(
            GeminiProvider::endpoint("gemini-2.0-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent",
        );
    }

    #[test]
    fn test_build_request_body_shape() {
        let body = GeminiProvider::build_request_body("I feel a bit low");
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("User message: I feel a bit low"));
        assert!(prompt.contains("Never provide medical advice or diagnose"));

        let config = &body["generationConfig"];
        assert_eq!(config["temperature"], 0.7);
        assert_eq!(config["maxOutputTokens"], 200);
        assert_eq!(config["topP"], 0.8);
        assert_eq!(config["topK"], 40);
    }

    #[test]
    fn test_prompt_truncates_long_input() {
        let long_input = "a".repeat(600);
        let prompt = GeminiProvider::build_prompt(&long_input);
        assert!(prompt.contains(&"a".repeat(500)));
        assert!(!prompt.contains(&"a".repeat(501)));
    }

    #[test]
    fn test_parse_response_success() {
        let response = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "  You are not alone.  " }] } }
            ]
        });
        let reply = GeminiProvider::parse_response(&response).unwrap();
        assert_eq!(reply, "You are not alone.");
    }

    #[test]
    fn test_parse_response_rejects_wrong_shape() {
        let response = json!({ "candidates": [] });
        assert!(matches!(
            GeminiProvider::parse_response(&response),
            Err(ProviderError::Envelope { .. }),
        ));

        let response = json!({ "error": { "message": "quota" } });
        assert!(GeminiProvider::parse_response(&response).is_err());
    }

    #[test]
    fn test_parse_response_rejects_empty_text() {
        let response = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "   " }] } }
            ]
        });
        assert!(matches!(
            GeminiProvider::parse_response(&response),
            Err(ProviderError::Envelope { .. }),
        ));
    }

    #[tokio::test]
    async fn test_missing_credential_degrades_without_network() {
        let provider = GeminiProvider::new();
        let config = ProviderConfig::new("gemini", None, "gemini-2.0-flash");
        let reply = provider.generate_reply("hello", &config).await;
        assert_eq!(reply.text, FALLBACK_REPLY);
        assert_eq!(reply.provider_used, Provider::Gemini);
        assert!(reply.used_fallback);
    }

    #[tokio::test]
    async fn test_empty_credential_counts_as_missing() {
        let provider = GeminiProvider::new();
        let config = ProviderConfig::new("gemini", Some(String::new()), "gemini-2.0-flash");
        let reply = provider.generate_reply("hello", &config).await;
        assert!(reply.used_fallback);
        assert_eq!(reply.text, FALLBACK_REPLY);
    }
}
