//! Pluggable backend for feed controllers.

use async_trait::async_trait;

use amoria_core::result::AppResult;
use amoria_entity::notification::{Notification, NotificationCounts, NotificationKey};

/// Backend a feed controller polls and writes through.
///
/// [`crate::ApiFeedSource`] talks to the HTTP API with a bearer token;
/// [`crate::LocalFeedSource`] calls the notification service in-process.
/// Tests substitute a scripted source.
#[async_trait]
pub trait FeedSource: Send + Sync + std::fmt::Debug {
    /// Current badge counts for the authenticated member.
    async fn fetch_counts(&self) -> AppResult<NotificationCounts>;

    /// The assembled notification feed, newest first.
    async fn fetch_feed(&self, limit: Option<u32>) -> AppResult<Vec<Notification>>;

    /// Mark one notification read. Returns the navigation path.
    async fn mark_read(&self, key: NotificationKey) -> AppResult<String>;

    /// Mark everything read. Returns how many rows were flipped.
    async fn mark_all_read(&self) -> AppResult<u64>;

    /// Dismiss one notification durably for this session.
    async fn dismiss(&self, key: NotificationKey) -> AppResult<()>;
}
