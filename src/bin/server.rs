//! Companion HTTP server binary.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 8000)
//! - `PROVIDER` — reply backend: "mock" (default), "gemini", or "perplexity"
//! - `GEMINI_API_KEY` / `GEMINI_MODEL` — Gemini credential and model
//! - `PERPLEXITY_API_KEY` / `PERPLEXITY_MODEL` — Perplexity credential and model
//! - `REQUEST_TIMEOUT_SECS` — remote call deadline (default: 10)
//! - `RUST_LOG` — log filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! # or against a real backend:
//! PROVIDER=gemini GEMINI_API_KEY=... cargo run --bin server
//! ```

use companion::config::ProviderConfig;
use companion::server::{app_router, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,companion=debug".into()),
        )
        .init();

    let config = ProviderConfig::from_env();
    tracing::info!(
        "provider '{}' (configured: {})",
        config.provider,
        config.is_configured(),
    );

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let bind_addr = format!("0.0.0.0:{}", port);

    let state = AppState::new(config);
    let app = app_router(state);

    tracing::info!("companion server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health  — liveness probe");
    tracing::info!("  POST /analyze — affect analysis + generated reply");
    tracing::info!("  POST /chat    — alias of /analyze");
    tracing::info!("  GET  /debug   — provider configuration status");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
