//! Admin dashboard handlers.

use axum::Json;
use axum::extract::{Query, State};

use amoria_entity::activity::{ActivityItem, SystemStats};

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, LimitQuery};
use crate::middleware::rbac;
use crate::state::AppState;

/// GET /api/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<SystemStats>>> {
    rbac::require_admin(&auth)?;
    let stats = state.activity_service.system_stats(auth.context()).await?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// GET /api/dashboard/activity
pub async fn activity(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<LimitQuery>,
) -> ApiResult<Json<ApiResponse<Vec<ActivityItem>>>> {
    rbac::require_admin(&auth)?;
    let items = state
        .activity_service
        .recent_activity(auth.context(), params.limit)
        .await?;
    Ok(Json(ApiResponse::ok(items)))
}
