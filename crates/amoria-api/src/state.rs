//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use amoria_auth::JwtDecoder;
use amoria_core::config::AppConfig;
use amoria_service::{ActivityService, AnnouncementService, NotificationService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Notification feed assembly and read/dismiss operations.
    pub notification_service: Arc<NotificationService>,
    /// Announcement visibility and view tracking.
    pub announcement_service: Arc<AnnouncementService>,
    /// Admin activity aggregation and platform statistics.
    pub activity_service: Arc<ActivityService>,
}
