//! Route definitions for the Amoria HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(notification_routes())
        .merge(announcement_routes())
        .merge(dashboard_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);
    let body_limit = state.config.server.body_limit_bytes;

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Notification feed endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list))
        .route("/notifications/counts", get(handlers::notification::counts))
        .route(
            "/notifications/{key}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{key}",
            delete(handlers::notification::dismiss),
        )
}

/// Announcement endpoints
fn announcement_routes() -> Router<AppState> {
    Router::new()
        .route("/announcements/active", get(handlers::announcement::active))
        .route(
            "/announcements/{id}/view",
            post(handlers::announcement::record_view),
        )
        .route(
            "/announcements/{id}/dismiss",
            post(handlers::announcement::dismiss),
        )
}

/// Admin dashboard endpoints
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/stats", get(handlers::dashboard::stats))
        .route("/dashboard/activity", get(handlers::dashboard::activity))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
