//! Shared helpers used across the analyzer and the providers.

pub mod text;
