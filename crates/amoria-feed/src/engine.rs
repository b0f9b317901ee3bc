//! Session-to-controller registry.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};

use amoria_core::config::FeedConfig;
use amoria_core::types::SessionId;

use crate::controller;
use crate::handle::FeedHandle;
use crate::source::FeedSource;

/// Owns one running feed controller per mounted session.
///
/// Mounting the same session twice replaces the previous controller,
/// so a client reconnect never leaks a polling task.
#[derive(Debug)]
pub struct FeedEngine {
    config: FeedConfig,
    sessions: DashMap<SessionId, FeedHandle>,
}

impl FeedEngine {
    pub fn new(config: FeedConfig) -> Self {
        Self {
            config,
            sessions: DashMap::new(),
        }
    }

    /// Start a controller for `session`, replacing any running one.
    pub fn mount(&self, session: SessionId, source: Arc<dyn FeedSource>) -> FeedHandle {
        let handle = controller::spawn(source, self.config.clone());
        if let Some(previous) = self.sessions.insert(session, handle.clone()) {
            previous.shutdown();
        }
        info!(%session, "feed controller mounted");
        handle
    }

    /// Handle for a mounted session, if any.
    pub fn get(&self, session: SessionId) -> Option<FeedHandle> {
        self.sessions.get(&session).map(|entry| entry.clone())
    }

    /// Stop and forget the controller for `session`.
    pub fn unmount(&self, session: SessionId) {
        if let Some((_, handle)) = self.sessions.remove(&session) {
            handle.shutdown();
            debug!(%session, "feed controller unmounted");
        }
    }

    /// Number of mounted sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Stop every controller. Called on server shutdown.
    pub fn shutdown_all(&self) {
        for entry in self.sessions.iter() {
            entry.value().shutdown();
        }
        self.sessions.clear();
        info!("all feed controllers stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amoria_core::result::AppResult;
    use amoria_entity::notification::{Notification, NotificationCounts, NotificationKey};
    use async_trait::async_trait;

    #[derive(Debug)]
    struct NullSource;

    #[async_trait]
    impl FeedSource for NullSource {
        async fn fetch_counts(&self) -> AppResult<NotificationCounts> {
            Ok(NotificationCounts::default())
        }

        async fn fetch_feed(&self, _limit: Option<u32>) -> AppResult<Vec<Notification>> {
            Ok(Vec::new())
        }

        async fn mark_read(&self, key: NotificationKey) -> AppResult<String> {
            Ok(key.kind.navigation_target().as_path().to_string())
        }

        async fn mark_all_read(&self) -> AppResult<u64> {
            Ok(0)
        }

        async fn dismiss(&self, _key: NotificationKey) -> AppResult<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_get_unmount() {
        let engine = FeedEngine::new(FeedConfig::default());
        let session = SessionId::new();
        assert!(engine.get(session).is_none());

        engine.mount(session, Arc::new(NullSource));
        assert_eq!(engine.session_count(), 1);
        let handle = engine.get(session).unwrap();
        assert!(!handle.is_stopped());

        engine.unmount(session);
        assert!(engine.get(session).is_none());
        assert!(handle.is_stopped());
        assert_eq!(engine.session_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_replaces_the_previous_controller() {
        let engine = FeedEngine::new(FeedConfig::default());
        let session = SessionId::new();

        let first = engine.mount(session, Arc::new(NullSource));
        let second = engine.mount(session, Arc::new(NullSource));

        assert!(first.is_stopped());
        assert!(!second.is_stopped());
        assert_eq!(engine.session_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_all_stops_everything() {
        let engine = FeedEngine::new(FeedConfig::default());
        let a = engine.mount(SessionId::new(), Arc::new(NullSource));
        let b = engine.mount(SessionId::new(), Arc::new(NullSource));

        engine.shutdown_all();
        assert!(a.is_stopped());
        assert!(b.is_stopped());
        assert_eq!(engine.session_count(), 0);
    }
}
