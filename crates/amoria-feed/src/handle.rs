//! Client-facing handle to a running feed controller.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{mpsc, oneshot, watch};

use amoria_core::error::AppError;
use amoria_core::result::AppResult;
use amoria_entity::notification::{NotificationCounts, NotificationKey};

use crate::controller::Command;
use crate::snapshot::FeedSnapshot;

/// Handle to one session's feed controller.
///
/// Cheap to clone. Snapshot and counts are exposed through watch
/// channels, so readers always see the latest published state without
/// queueing behind the controller task.
#[derive(Debug, Clone)]
pub struct FeedHandle {
    commands: mpsc::Sender<Command>,
    snapshot_rx: watch::Receiver<FeedSnapshot>,
    counts_rx: watch::Receiver<NotificationCounts>,
    stopped: Arc<AtomicBool>,
}

impl FeedHandle {
    pub(crate) fn new(
        commands: mpsc::Sender<Command>,
        snapshot_rx: watch::Receiver<FeedSnapshot>,
        counts_rx: watch::Receiver<NotificationCounts>,
        stopped: Arc<AtomicBool>,
    ) -> Self {
        Self {
            commands,
            snapshot_rx,
            counts_rx,
            stopped,
        }
    }

    /// Latest published feed snapshot.
    pub fn snapshot(&self) -> FeedSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Latest published badge counts.
    pub fn counts(&self) -> NotificationCounts {
        *self.counts_rx.borrow()
    }

    /// Watch channel for snapshot updates.
    pub fn watch_snapshot(&self) -> watch::Receiver<FeedSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Watch channel for badge count updates.
    pub fn watch_counts(&self) -> watch::Receiver<NotificationCounts> {
        self.counts_rx.clone()
    }

    /// Ask the controller to re-fetch counts and feed now.
    pub async fn refresh(&self) -> AppResult<()> {
        self.send(Command::Refresh).await
    }

    /// Mark one notification read.
    ///
    /// Returns the navigation path, or `None` when the key is not in the
    /// current feed (the request is then a no-op).
    pub async fn mark_read(&self, key: NotificationKey) -> AppResult<Option<String>> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::MarkRead(key, tx)).await?;
        rx.await.map_err(|_| Self::gone())?
    }

    /// Mark every notification read. Returns the flipped-row total.
    pub async fn mark_all_read(&self) -> AppResult<u64> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::MarkAllRead(tx)).await?;
        rx.await.map_err(|_| Self::gone())?
    }

    /// Dismiss one notification for this session.
    pub async fn dismiss(&self, key: NotificationKey) -> AppResult<()> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Dismiss(key, tx)).await?;
        rx.await.map_err(|_| Self::gone())?
    }

    /// Stop the controller. In-flight fetch results are discarded.
    pub fn shutdown(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        let _ = self.commands.try_send(Command::Shutdown);
    }

    /// Whether the controller has been shut down.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    async fn send(&self, command: Command) -> AppResult<()> {
        if self.is_stopped() {
            return Err(Self::gone());
        }
        self.commands.send(command).await.map_err(|_| Self::gone())
    }

    fn gone() -> AppError {
        AppError::internal("Feed controller is not running")
    }
}
