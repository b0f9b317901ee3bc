//! In-process feed source.
//!
//! Calls `NotificationService` directly instead of going through the HTTP
//! API. Used when a controller runs inside the server process, and by
//! tests that want real assembly semantics without a listener.

use std::sync::Arc;

use async_trait::async_trait;

use amoria_core::result::AppResult;
use amoria_entity::notification::{Notification, NotificationCounts, NotificationKey};
use amoria_service::{NotificationService, RequestContext};

use crate::source::FeedSource;

/// [`FeedSource`] implementation over an in-process [`NotificationService`].
#[derive(Debug, Clone)]
pub struct LocalFeedSource {
    service: Arc<NotificationService>,
    ctx: RequestContext,
}

impl LocalFeedSource {
    /// Create a source acting as `ctx` against `service`.
    ///
    /// The context is captured once at mount time; the controller keeps
    /// acting as that member and session for its whole lifetime, exactly
    /// like a bearer token does for [`crate::ApiFeedSource`].
    pub fn new(service: Arc<NotificationService>, ctx: RequestContext) -> Self {
        Self { service, ctx }
    }
}

#[async_trait]
impl FeedSource for LocalFeedSource {
    async fn fetch_counts(&self) -> AppResult<NotificationCounts> {
        self.service.counts(&self.ctx).await
    }

    async fn fetch_feed(&self, limit: Option<u32>) -> AppResult<Vec<Notification>> {
        self.service.feed(&self.ctx, limit).await
    }

    async fn mark_read(&self, key: NotificationKey) -> AppResult<String> {
        let target = self.service.mark_read(&self.ctx, key).await?;
        Ok(target.as_path().to_string())
    }

    async fn mark_all_read(&self) -> AppResult<u64> {
        self.service.mark_all_read(&self.ctx).await
    }

    async fn dismiss(&self, key: NotificationKey) -> AppResult<()> {
        self.service.dismiss(&self.ctx, key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amoria_core::config::{DatabaseConfig, FeedConfig};
    use amoria_core::types::{MemberId, SessionId};
    use amoria_database::DatabasePool;
    use amoria_database::repositories::{
        AdminMessageRepository, DismissalRepository, FavoriteRepository, MatchRepository,
        MatchRequestRepository, MessageRepository, ProfileViewRepository, ReportRepository,
    };
    use amoria_entity::member::MemberRole;

    #[tokio::test]
    async fn test_mounts_as_a_feed_source() {
        let pool = DatabasePool::connect_lazy(&DatabaseConfig::default())
            .expect("lazy pool")
            .into_pool();
        let service = Arc::new(NotificationService::new(
            Arc::new(MatchRepository::new(pool.clone())),
            Arc::new(MessageRepository::new(pool.clone())),
            Arc::new(FavoriteRepository::new(pool.clone())),
            Arc::new(MatchRequestRepository::new(pool.clone())),
            Arc::new(ProfileViewRepository::new(pool.clone())),
            Arc::new(ReportRepository::new(pool.clone())),
            Arc::new(AdminMessageRepository::new(pool.clone())),
            Arc::new(DismissalRepository::new(pool)),
            FeedConfig::default(),
        ));
        let ctx = RequestContext::new(
            MemberId::new(),
            SessionId::new(),
            MemberRole::Member,
            "member",
        );

        let source: Arc<dyn FeedSource> = Arc::new(LocalFeedSource::new(service, ctx));
        assert!(format!("{source:?}").contains("LocalFeedSource"));
    }
}
