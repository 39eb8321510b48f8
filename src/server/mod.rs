//! HTTP serving layer.
//!
//! Thin axum wrapper combining the affect analyzer and the provider router
//! into a small JSON API.
//!
//! # Endpoints
//!
//! - `GET  /`        — service banner
//! - `GET  /health`  — liveness probe
//! - `POST /analyze` — affect analysis plus a generated reply
//! - `POST /chat`    — alias of `/analyze`
//! - `GET  /debug`   — provider configuration status

pub mod routes;

pub use routes::{app_router, AppState};
