//! Portal read handlers.

use axum::extract::{Path, State};
use axum::Json;

use tenderwatch_entity::Portal;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/portals
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<Portal>>>> {
    let portals = state.portals.list_all().await?;
    Ok(Json(ApiResponse::ok(portals)))
}

/// GET /api/portals/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Portal>>> {
    let portal = state.portals.get(&id).await?;
    Ok(Json(ApiResponse::ok(portal)))
}
