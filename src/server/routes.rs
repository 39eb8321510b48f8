//! Axum route handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::affect::{self, Emotion, SentimentLabel};
use crate::config::ProviderConfig;
use crate::errors::InputError;
use crate::providers::{Provider, ProviderRouter};

/// Shared application state. Cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ProviderRouter>,
}

impl AppState {
    pub fn new(config: ProviderConfig) -> Self {
        AppState {
            router: Arc::new(ProviderRouter::new(config)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub provider: Provider,
    pub sentiment: SentimentLabel,
    pub emotion: String,
    pub emotion_confidence: f64,
    pub reply: String,
    pub debug: DebugInfo,
}

#[derive(Debug, Serialize)]
pub struct DebugInfo {
    pub score: i32,
    pub pos_hits: Vec<String>,
    pub neg_hits: Vec<String>,
    pub emotion_scores: BTreeMap<Emotion, u32>,
    pub used_fallback: bool,
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .route("/chat", post(analyze_handler))
        .route("/debug", get(debug_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
    }))
}

/// GET / — service banner.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": "Companion API",
        "provider": state.router.config().provider,
        "endpoints": ["/health", "/analyze", "/chat", "/debug"],
    }))
}

/// POST /analyze — analyze user text and generate a reply.
///
/// Empty or whitespace-only text is the one validation failure surfaced to
/// the caller; provider trouble never is, it only flips `used_fallback`.
async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<Value>)> {
    if request.text.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": InputError::EmptyText.to_string() })),
        ));
    }

    // Both subsystems see the full text; only the remote wire payload is
    // truncated, inside the adapter.
    let analysis = affect::analyze(&request.text);
    let reply = state.router.route(&request.text).await;

    Ok(Json(AnalyzeResponse {
        provider: reply.provider_used,
        sentiment: analysis.label,
        emotion: analysis.emotion_name().to_string(),
        emotion_confidence: analysis.emotion_confidence,
        reply: reply.text,
        debug: DebugInfo {
            score: analysis.score,
            pos_hits: analysis.positive_matches,
            neg_hits: analysis.negative_matches,
            emotion_scores: analysis.emotion_scores,
            used_fallback: reply.used_fallback,
        },
    }))
}

/// GET /debug — provider configuration status.
async fn debug_handler(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.router.config();
    Json(json!({
        "current_provider": config.provider,
        "provider_configured": config.is_configured(),
        "all_providers": config.provider_status(),
        "request_timeout_secs": config.timeout.as_secs(),
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
