//! Announcement handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use amoria_core::types::AnnouncementId;
use amoria_entity::announcement::{Announcement, AnnouncementView};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/announcements/active
pub async fn active(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<Announcement>>>> {
    let announcements = state.announcement_service.active_for(auth.context()).await?;
    Ok(Json(ApiResponse::ok(announcements)))
}

/// POST /api/announcements/{id}/view
pub async fn record_view(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<AnnouncementView>>> {
    let view = state
        .announcement_service
        .record_view(auth.context(), AnnouncementId::from(id))
        .await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// POST /api/announcements/{id}/dismiss
pub async fn dismiss(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state
        .announcement_service
        .dismiss(auth.context(), AnnouncementId::from(id))
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Dismissed"))))
}
