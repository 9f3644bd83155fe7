//! Router creation and configuration

use axum::{routing::get, Router};
use sentinel_gateway::MetricsGateway;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::*;
use super::types::AppState;

/// Create the dashboard router
pub fn create_router(gateway: MetricsGateway) -> Router {
    let state = AppState { gateway };

    Router::new()
        .route("/", get(dashboard_page))
        .route("/health", get(health))
        .route("/api/v1/dashboard", get(dashboard))
        .route("/api/v1/snapshot", get(snapshot))
        .route("/api/v1/fraud-logs", get(fraud_logs))
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
