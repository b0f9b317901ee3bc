//! Server composition root — wires repositories, services, and the
//! retention scheduler into a running Axum application.

use std::sync::Arc;

use sqlx::PgPool;

use amoria_auth::JwtDecoder;
use amoria_core::AppError;
use amoria_core::config::AppConfig;
use amoria_database::repositories::{
    AdminMessageRepository, AnnouncementRepository, DismissalRepository, FavoriteRepository,
    MatchRepository, MatchRequestRepository, MemberRepository, MessageRepository, PhotoRepository,
    ProfileViewRepository, ReportRepository,
};
use amoria_service::{ActivityService, AnnouncementService, NotificationService};
use amoria_worker::{RetentionSweeper, SweepScheduler};

use crate::router::build_router;
use crate::state::AppState;

/// Runs the Amoria server with the given configuration and database pool.
///
/// Blocks until a shutdown signal arrives, then drains in-flight requests
/// and stops the retention scheduler before returning.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    // ── Step 1: Initialize repositories ──────────────────────────
    let members = Arc::new(MemberRepository::new(db_pool.clone()));
    let matches = Arc::new(MatchRepository::new(db_pool.clone()));
    let messages = Arc::new(MessageRepository::new(db_pool.clone()));
    let favorites = Arc::new(FavoriteRepository::new(db_pool.clone()));
    let requests = Arc::new(MatchRequestRepository::new(db_pool.clone()));
    let profile_views = Arc::new(ProfileViewRepository::new(db_pool.clone()));
    let photos = Arc::new(PhotoRepository::new(db_pool.clone()));
    let reports = Arc::new(ReportRepository::new(db_pool.clone()));
    let support = Arc::new(AdminMessageRepository::new(db_pool.clone()));
    let dismissals = Arc::new(DismissalRepository::new(db_pool.clone()));
    let announcements = Arc::new(AnnouncementRepository::new(db_pool.clone()));

    // ── Step 2: Initialize auth ──────────────────────────────────
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // ── Step 3: Initialize services ──────────────────────────────
    let notification_service = Arc::new(NotificationService::new(
        Arc::clone(&matches),
        Arc::clone(&messages),
        Arc::clone(&favorites),
        Arc::clone(&requests),
        Arc::clone(&profile_views),
        Arc::clone(&reports),
        Arc::clone(&support),
        Arc::clone(&dismissals),
        config.feed.clone(),
    ));
    let announcement_service = Arc::new(AnnouncementService::new(Arc::clone(&announcements)));
    let activity_service = Arc::new(ActivityService::new(
        Arc::clone(&members),
        Arc::clone(&matches),
        Arc::clone(&messages),
        Arc::clone(&photos),
        Arc::clone(&reports),
        config.feed.clone(),
    ));

    tracing::info!("Services initialized");

    // ── Step 4: Start retention scheduler ────────────────────────
    let sweep_scheduler = if config.worker.enabled {
        let sweeper = Arc::new(RetentionSweeper::new(
            Arc::clone(&dismissals),
            Arc::clone(&profile_views),
            config.worker.clone(),
        ));
        let scheduler = SweepScheduler::new(sweeper).await?;
        scheduler.register_default_tasks().await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Retention scheduler disabled");
        None
    };

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        jwt_decoder,
        notification_service,
        announcement_service,
        activity_service,
    };

    let app = build_router(app_state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Amoria server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 6: Stop background tasks ────────────────────────────
    if let Some(mut scheduler) = sweep_scheduler {
        if let Err(e) = scheduler.shutdown().await {
            tracing::warn!("Sweep scheduler shutdown failed: {}", e);
        }
    }

    tracing::info!("Amoria server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
