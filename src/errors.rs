//! Error types.
//!
//! Provider failures never cross the adapter boundary: every
//! [`ProviderError`] is converted into the provider's fixed fallback reply
//! before a caller can see it. [`InputError`] is the only error surfaced to
//! callers, as a request validation failure in the serving layer.

use thiserror::Error;

/// Request validation errors surfaced to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The request text was empty or whitespace-only.
    #[error("Text cannot be empty")]
    EmptyText,
}

/// Failures a provider adapter can hit while producing a reply.
///
/// Grouped by the stage that fails: configuration (credential check before
/// dispatch), transport (the network call itself), protocol (the response
/// after a connection succeeded).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider requires a credential that was not supplied; no network
    /// attempt is made.
    #[error("{provider} API key not set")]
    MissingCredential { provider: &'static str },

    /// The call exceeded the configured timeout. Partial responses are
    /// discarded, never merged into a result.
    #[error("{provider} request timed out")]
    Timeout { provider: &'static str },

    /// Connection-level failure before a status code was received.
    #[error("{provider} transport error: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// The response body did not match the expected envelope shape.
    #[error("unexpected {provider} response envelope: {detail}")]
    Envelope {
        provider: &'static str,
        detail: String,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_message() {
        assert_eq!(InputError::EmptyText.to_string(), "Text cannot be empty");
    }

    #[test]
    fn test_provider_error_messages_name_the_provider() {
        let err = ProviderError::MissingCredential { provider: "gemini" };
        assert_eq!(err.to_string(), "gemini API key not set");

        let err = ProviderError::Status {
            provider: "perplexity",
            status: 503,
            body: "unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("perplexity"));
    }
}
