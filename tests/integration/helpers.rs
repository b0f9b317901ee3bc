//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use amoria_api::AppState;
use amoria_api::router::build_router;
use amoria_auth::{JwtDecoder, JwtEncoder};
use amoria_core::config::AppConfig;
use amoria_core::types::{MemberId, SessionId};
use amoria_database::connection::DatabasePool;
use amoria_database::repositories::{
    AdminMessageRepository, AnnouncementRepository, DismissalRepository, FavoriteRepository,
    MatchRepository, MatchRequestRepository, MemberRepository, MessageRepository, PhotoRepository,
    ProfileViewRepository, ReportRepository,
};
use amoria_entity::member::MemberRole;
use amoria_service::{ActivityService, AnnouncementService, NotificationService};

/// A response captured from the router.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Token encoder sharing the router's secret
    encoder: JwtEncoder,
}

impl TestApp {
    /// Build the full router against a lazy pool.
    ///
    /// No connection is made until a handler actually queries, so tests
    /// covering auth and validation never need PostgreSQL.
    pub fn new() -> Self {
        let config: AppConfig = serde_json::from_str("{}").expect("default config");

        let db_pool = DatabasePool::connect_lazy(&config.database)
            .expect("lazy pool")
            .into_pool();

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

        let state = AppState {
            config: Arc::new(config.clone()),
            db_pool,
            jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
            notification_service: Arc::new(NotificationService::new(
                matches.clone(),
                messages.clone(),
                favorites,
                requests,
                profile_views,
                reports.clone(),
                support,
                dismissals,
                config.feed.clone(),
            )),
            announcement_service: Arc::new(AnnouncementService::new(announcements)),
            activity_service: Arc::new(ActivityService::new(
                members,
                matches,
                messages,
                photos,
                reports,
                config.feed.clone(),
            )),
        };

        Self {
            router: build_router(state),
            encoder: JwtEncoder::new(&config.auth),
        }
    }

    /// Mint a bearer token for a fresh member with the given role.
    pub fn token(&self, role: MemberRole) -> String {
        let (token, _) = self
            .encoder
            .generate_access_token(MemberId::new(), SessionId::new(), role, "Test Member")
            .expect("token");
        token
    }

    /// Issue a request and capture status plus JSON body.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = builder.body(Body::empty()).expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
