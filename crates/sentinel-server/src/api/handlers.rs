//! API endpoint handlers
//!
//! Every handler that shows metrics triggers exactly one gateway fetch.
//! Backend failures are absorbed by the gateway, so these never fail
//! because of the backend.

use axum::{
    extract::State,
    http::Uri,
    response::Html,
    Json,
};
use sentinel_core::{FraudLogEntry, Sourced};
use sentinel_view::{build_dashboard, DashboardView};
use tracing::{info, warn};

use super::types::*;
use crate::error::ServerError;
use crate::render::render_dashboard;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Dashboard page
pub(super) async fn dashboard_page(
    State(state): State<AppState>,
) -> Result<Html<String>, ServerError> {
    let snapshot = state.gateway.fetch_snapshot().await;
    let view = build_dashboard(&snapshot);

    let html = render_dashboard(&view)
        .map_err(|e| ServerError::InternalError(format!("Failed to render dashboard: {}", e)))?;

    Ok(Html(html))
}

/// Dashboard view model as JSON
pub(super) async fn dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    let snapshot = state.gateway.fetch_snapshot().await;
    let view = build_dashboard(&snapshot);

    if view.data_sources.degraded {
        info!("Serving dashboard with degraded groups: {:?}", snapshot.degraded_groups());
    }

    Json(view)
}

/// Raw metrics snapshot
pub(super) async fn snapshot(State(state): State<AppState>) -> Json<SnapshotResponse> {
    Json(SnapshotResponse::from(state.gateway.fetch_snapshot().await))
}

/// Recent fraud detection events
pub(super) async fn fraud_logs(
    State(state): State<AppState>,
) -> Json<Sourced<Vec<FraudLogEntry>>> {
    Json(state.gateway.fetch_fraud_logs().await)
}

/// Fallback for unknown routes
pub(super) async fn not_found(uri: Uri) -> ServerError {
    warn!("No route for {}", uri.path());
    ServerError::NotFound(format!("No route for {}", uri.path()))
}
