//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::metrics::HttpMetrics;

/// Greeting returned by `/api`.
pub const API_GREETING: &str = "Hello from Backend!";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration captured at startup.
    pub config: Arc<Config>,
    /// Request metrics collector.
    pub metrics: HttpMetrics,
}

impl AppState {
    /// Create new app state.
    pub fn new(config: Config, metrics: HttpMetrics) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Status: "ready".
    pub status: &'static str,
}

/// Informational API response.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    /// Fixed greeting.
    pub message: &'static str,
    /// Deployment environment name.
    pub environment: String,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "healthy" })
}

/// Readiness check handler - always returns 200, no dependency checks.
pub async fn ready() -> impl IntoResponse {
    Json(ReadyResponse { status: "ready" })
}

/// API root handler - greeting plus the configured environment.
pub async fn api_root(State(state): State<AppState>) -> impl IntoResponse {
    let environment = state.config.app_env.clone();
    info!(environment = %environment, "API request received in {} environment", environment);

    Json(ApiResponse {
        message: API_GREETING,
        environment,
    })
}

/// Prometheus scrape handler.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
