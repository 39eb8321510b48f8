//! Provider configuration.
//!
//! A [`ProviderConfig`] is built once at startup and passed by reference
//! afterwards; nothing mutates it. Tests that need a different credential or
//! timeout construct a fresh value instead of touching shared state.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

/// Deadline for a single remote provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default Gemini model identifier.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Default Perplexity model identifier.
pub const DEFAULT_PERPLEXITY_MODEL: &str = "llama-3.1-sonar-small-128k-chat";

/// Credentials at or below this length are reported as not configured.
const MIN_CREDENTIAL_LEN: usize = 10;

/// Availability and configuration state of one backend, as reported by the
/// diagnostics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderStatus {
    /// A credential is present (trivially true for the local provider).
    pub available: bool,
    /// The credential is plausible enough to attempt a call.
    pub configured: bool,
}

/// Immutable provider settings for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Raw provider identifier; the router matches it case-insensitively.
    pub provider: String,
    /// Credential for the selected remote provider, if any.
    pub api_key: Option<String>,
    /// Model identifier sent to the remote provider.
    pub model: String,
    /// Deadline for one remote call. A miss degrades to fallback, no retry.
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn new(
        provider: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        ProviderConfig {
            provider: provider.into(),
            api_key,
            model: model.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Configuration selecting the local rule-based provider.
    pub fn mock() -> Self {
        ProviderConfig::new("mock", None, "")
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// `PROVIDER` selects the backend (default `"mock"`); the credential and
    /// model variables for that backend are then read:
    /// `GEMINI_API_KEY`/`GEMINI_MODEL` or
    /// `PERPLEXITY_API_KEY`/`PERPLEXITY_MODEL`. `REQUEST_TIMEOUT_SECS`
    /// overrides the 10 second default.
    pub fn from_env() -> Self {
        let provider = std::env::var("PROVIDER").unwrap_or_else(|_| "mock".to_string());

        let (api_key, model) = match provider.to_lowercase().as_str() {
            "gemini" => (
                std::env::var("GEMINI_API_KEY").ok(),
                std::env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            ),
            "perplexity" => (
                std::env::var("PERPLEXITY_API_KEY").ok(),
                std::env::var("PERPLEXITY_MODEL")
                    .unwrap_or_else(|_| DEFAULT_PERPLEXITY_MODEL.to_string()),
            ),
            _ => (None, String::new()),
        };

        let timeout = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        ProviderConfig {
            provider,
            api_key,
            model,
            timeout,
        }
    }

    /// Whether the selected provider has a plausible credential.
    ///
    /// The local provider needs none and always reports configured; an
    /// unknown identifier routes to the local provider, so it does too.
    pub fn is_configured(&self) -> bool {
        match self.provider.to_lowercase().as_str() {
            "gemini" | "perplexity" => self
                .api_key
                .as_deref()
                .map(|key| key.len() > MIN_CREDENTIAL_LEN)
                .unwrap_or(false),
            _ => true,
        }
    }

    /// Per-provider status report for diagnostics.
    ///
    /// The local provider is always available and configured. A remote
    /// backend is available when it is the selected provider and carries a
    /// credential, and configured when that credential is plausible; the
    /// config only holds the selected provider's credential, so the other
    /// remote always reports unavailable.
    pub fn provider_status(&self) -> BTreeMap<&'static str, ProviderStatus> {
        let selected = self.provider.to_lowercase();
        let has_key = self
            .api_key
            .as_deref()
            .map(|key| !key.is_empty())
            .unwrap_or(false);
        let plausible = self
            .api_key
            .as_deref()
            .map(|key| key.len() > MIN_CREDENTIAL_LEN)
            .unwrap_or(false);

        let remote = |name: &str| ProviderStatus {
            available: selected == name && has_key,
            configured: selected == name && plausible,
        };

        BTreeMap::from([
            (
                "mock",
                ProviderStatus {
                    available: true,
                    configured: true,
                },
            ),
            ("gemini", remote("gemini")),
            ("perplexity", remote("perplexity")),
        ])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
