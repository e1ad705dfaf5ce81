//! Notification handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use tenderwatch_core::types::pagination::{PageRequest, PageResponse};
use tenderwatch_entity::Notification;

use crate::dto::request::NotificationListQuery;
use crate::dto::response::{ApiResponse, CountResponse, MessageResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/notifications
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<NotificationListQuery>,
) -> ApiResult<Json<ApiResponse<PageResponse<Notification>>>> {
    let page = PageRequest::new(query.page, query.page_size);
    let notifications = state.notifications.list(query.unread_only, &page).await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<CountResponse>>> {
    let count = state.notifications.unread_count().await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.notifications.mark_read(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Notification marked as read".to_string(),
    })))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<CountResponse>>> {
    let count = state.notifications.mark_all_read().await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}
