//! Notification feed handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use amoria_entity::notification::{Notification, NotificationCounts, NotificationKey};

use crate::dto::response::{ApiResponse, MarkAllResponse, MarkReadResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, LimitQuery};
use crate::state::AppState;

/// GET /api/notifications
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<LimitQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Notification>>>> {
    let feed = state
        .notification_service
        .feed(auth.context(), params.limit)
        .await?;
    Ok(Json(ApiResponse::ok(feed)))
}

/// GET /api/notifications/counts
pub async fn counts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<NotificationCounts>>> {
    let counts = state.notification_service.counts(auth.context()).await?;
    Ok(Json(ApiResponse::ok(counts)))
}

/// PUT /api/notifications/{key}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(key): Path<String>,
) -> ApiResult<Json<ApiResponse<MarkReadResponse>>> {
    let key: NotificationKey = key.parse()?;
    let target = state
        .notification_service
        .mark_read(auth.context(), key)
        .await?;
    Ok(Json(ApiResponse::ok(MarkReadResponse {
        navigate_to: target.as_path().to_string(),
    })))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<MarkAllResponse>>> {
    let marked = state
        .notification_service
        .mark_all_read(auth.context())
        .await?;
    Ok(Json(ApiResponse::ok(MarkAllResponse { marked })))
}

/// DELETE /api/notifications/{key}
pub async fn dismiss(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(key): Path<String>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let key: NotificationKey = key.parse()?;
    state
        .notification_service
        .dismiss(auth.context(), key)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Dismissed"))))
}
