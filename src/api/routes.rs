//! HTTP API route definitions.

use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::handlers::{api_root, health, metrics, ready, AppState};
use super::middleware::{handle_panic, track_metrics};

/// Metrics scrape path, served outside the instrumented routes.
pub const METRICS_PATH: &str = "/metrics";

/// Instrumented application routes, in registration order.
pub fn app_routes() -> Vec<(&'static str, MethodRouter<AppState>)> {
    vec![
        // Health endpoints
        ("/health", get(health)),
        ("/ready", get(ready)),
        // Informational endpoint
        ("/api", get(api_root)),
    ]
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    app_routes()
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| {
            router.route(path, handler)
        })
        .route_layer(middleware::from_fn_with_state(state.clone(), track_metrics))
        .route(METRICS_PATH, get(metrics))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
