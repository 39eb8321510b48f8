//! Reply providers.
//!
//! A provider turns user text into an empathetic reply. The local rule-based
//! provider always succeeds; remote providers degrade to a fixed fallback
//! reply on any failure (missing credential, timeout, non-2xx status, or an
//! unexpected response envelope) instead of surfacing an error.

pub mod gemini;
pub mod mock;
pub mod perplexity;
pub mod router;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::errors::ProviderError;

pub use gemini::GeminiProvider;
pub use mock::MockProvider;
pub use perplexity::PerplexityProvider;
pub use router::ProviderRouter;

/// Maximum number of input characters forwarded to a remote provider.
///
/// Only the outbound wire payload is truncated; the local provider and the
/// affect analyzer always see the full text.
pub const MAX_REMOTE_INPUT_CHARS: usize = 500;

// ---------------------------------------------------------------------------
// Provider identifiers
// ---------------------------------------------------------------------------

/// The closed set of reply backends.
///
/// Adding a backend means adding a variant here plus a [`ReplyProvider`]
/// implementation; the router carries no string-keyed branching beyond the
/// initial identifier lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Mock,
    Gemini,
    Perplexity,
}

impl Provider {
    /// Resolve a configured identifier, case-insensitively.
    pub fn from_identifier(identifier: &str) -> Option<Provider> {
        match identifier.to_lowercase().as_str() {
            "mock" => Some(Provider::Mock),
            "gemini" => Some(Provider::Gemini),
            "perplexity" => Some(Provider::Perplexity),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Mock => "mock",
            Provider::Gemini => "gemini",
            Provider::Perplexity => "perplexity",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReplyResult
// ---------------------------------------------------------------------------

/// A generated reply, genuine or degraded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyResult {
    /// The reply text. Never empty, fallback or not.
    pub text: String,
    /// The provider that actually executed, after identifier resolution.
    pub provider_used: Provider,
    /// True when the fixed fallback reply was substituted for a genuine one.
    pub used_fallback: bool,
}

// ---------------------------------------------------------------------------
// ReplyProvider trait
// ---------------------------------------------------------------------------

/// A reply backend.
///
/// [`ReplyProvider::generate_reply`] is total: adapters classify failures
/// internally as a [`ProviderError`] and degrade to their fixed fallback
/// reply rather than propagating anything to the caller. The only externally
/// visible trace of a failure is the `used_fallback` flag and a logged
/// diagnostic.
#[async_trait]
pub trait ReplyProvider: Send + Sync + fmt::Debug {
    /// Which backend this adapter speaks for.
    fn provider(&self) -> Provider;

    /// The fixed reply substituted when the backend cannot answer.
    fn fallback_reply(&self) -> &'static str;

    /// Attempt a genuine reply. Remote adapters check their credential
    /// before dispatch and bound the network call by `config.timeout`.
    async fn try_reply(
        &self,
        text: &str,
        config: &ProviderConfig,
    ) -> Result<String, ProviderError>;

    /// Produce a reply, degrading to the fallback on any failure.
    async fn generate_reply(&self, text: &str, config: &ProviderConfig) -> ReplyResult {
        match self.try_reply(text, config).await {
            Ok(text) => ReplyResult {
                text,
                provider_used: self.provider(),
                used_fallback: false,
            },
            Err(err) => {
                log::warn!("{} provider degraded to fallback: {}", self.provider(), err);
                ReplyResult {
                    text: self.fallback_reply().to_string(),
                    provider_used: self.provider(),
                    used_fallback: true,
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
