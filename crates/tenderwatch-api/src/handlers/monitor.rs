//! Monitor control handlers.

use axum::extract::State;
use axum::Json;

use tenderwatch_monitor::MonitorStatus;

use crate::dto::response::{ApiResponse, MonitorActionResponse};
use crate::state::AppState;

/// POST /api/monitor/start
pub async fn start(State(state): State<AppState>) -> Json<ApiResponse<MonitorActionResponse>> {
    let changed = state.scheduler.start();
    Json(ApiResponse::ok(MonitorActionResponse {
        active: true,
        changed,
    }))
}

/// POST /api/monitor/stop
pub async fn stop(State(state): State<AppState>) -> Json<ApiResponse<MonitorActionResponse>> {
    let changed = state.scheduler.stop();
    Json(ApiResponse::ok(MonitorActionResponse {
        active: false,
        changed,
    }))
}

/// GET /api/monitor/status
pub async fn status(State(state): State<AppState>) -> Json<ApiResponse<MonitorStatus>> {
    Json(ApiResponse::ok(state.scheduler.status()))
}
