//! # Companion
//!
//! Lexicon-based affect analysis paired with pluggable reply providers.
//!
//! Two independent subsystems:
//!
//! - the [`affect`] analyzer: deterministic, offline sentiment scoring and
//!   emotion detection over fixed word lexicons. A total function: every
//!   input, including empty text, yields a fully populated result.
//! - the [`providers`] router: reply generation through a local rule engine
//!   or a remote LLM backend, degrading to a fixed fallback reply whenever a
//!   backend is unreachable or misconfigured. Provider trouble never
//!   surfaces as an error, only as a `used_fallback` flag.
//!
//! The [`server`] module wraps both behind a small axum JSON API; the
//! `server` binary is the entrypoint.

pub mod affect;
pub mod config;
pub mod errors;
pub mod providers;
pub mod server;
pub mod utilities;

pub use affect::{analyze, AnalysisResult, Emotion, SentimentLabel};
pub use config::ProviderConfig;
pub use errors::{InputError, ProviderError};
pub use providers::{Provider, ProviderRouter, ReplyProvider, ReplyResult};

/// Crate version, reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
