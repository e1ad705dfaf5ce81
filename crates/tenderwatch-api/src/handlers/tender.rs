//! Tender read handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use tenderwatch_core::types::pagination::PageResponse;
use tenderwatch_entity::Tender;

use crate::dto::request::TenderListQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/tenders
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<TenderListQuery>,
) -> ApiResult<Json<ApiResponse<PageResponse<Tender>>>> {
    let (filter, page) = query.into_parts();
    let tenders = state.tenders.list(&filter, &page).await?;
    Ok(Json(ApiResponse::ok(tenders)))
}

/// GET /api/tenders/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Tender>>> {
    let tender = state.tenders.get(id).await?;
    Ok(Json(ApiResponse::ok(tender)))
}
