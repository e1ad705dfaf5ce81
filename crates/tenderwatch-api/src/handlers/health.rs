//! Health check handler.

use axum::extract::State;
use axum::Json;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let database = match &state.db {
        Some(pool) => match pool.health_check().await {
            Ok(true) => "connected".to_string(),
            _ => "unavailable".to_string(),
        },
        None => "memory".to_string(),
    };

    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        database,
        monitor_active: state.scheduler.is_active(),
        ws_subscribers: state.hub.subscriber_count(),
    }))
}
