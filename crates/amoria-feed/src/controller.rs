//! The per-session feed controller task.

use std::collections::HashSet;
use std::future::poll_fn;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

use amoria_core::config::FeedConfig;
use amoria_core::result::AppResult;
use amoria_entity::notification::{Notification, NotificationCounts, NotificationKey};

use crate::handle::FeedHandle;
use crate::snapshot::FeedSnapshot;
use crate::source::FeedSource;
use crate::timers::DismissTimers;

const COMMAND_BUFFER: usize = 32;

/// Commands a [`FeedHandle`] can send to its controller.
#[derive(Debug)]
pub(crate) enum Command {
    /// Re-fetch counts and feed immediately.
    Refresh,
    /// Mark one notification read; replies with the navigation path, or
    /// `None` when the key is not in the current feed.
    MarkRead(NotificationKey, oneshot::Sender<AppResult<Option<String>>>),
    /// Mark everything read; replies with the flipped-row total.
    MarkAllRead(oneshot::Sender<AppResult<u64>>),
    /// Dismiss one notification for this session.
    Dismiss(NotificationKey, oneshot::Sender<AppResult<()>>),
    /// Stop the controller task.
    Shutdown,
}

/// Spawn a controller task and return the handle bound to it.
pub(crate) fn spawn(source: Arc<dyn FeedSource>, config: FeedConfig) -> FeedHandle {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (snapshot_tx, snapshot_rx) = watch::channel(FeedSnapshot::default());
    let (counts_tx, counts_rx) = watch::channel(NotificationCounts::default());
    let stopped = Arc::new(AtomicBool::new(false));

    let controller = Controller {
        source,
        config,
        items: Vec::new(),
        suppressed: HashSet::new(),
        armed: HashSet::new(),
        snapshot_tx,
        counts_tx,
        stopped: stopped.clone(),
    };
    tokio::spawn(controller.run(command_rx));

    FeedHandle::new(command_tx, snapshot_rx, counts_rx, stopped)
}

/// State owned by one controller task.
#[derive(Debug)]
struct Controller {
    source: Arc<dyn FeedSource>,
    config: FeedConfig,
    /// Last successfully fetched feed, unfiltered.
    items: Vec<Notification>,
    /// Keys hidden in this session, by auto-dismiss or explicit dismiss.
    suppressed: HashSet<NotificationKey>,
    /// Keys that have had an auto-dismiss timer armed at some point.
    armed: HashSet<NotificationKey>,
    snapshot_tx: watch::Sender<FeedSnapshot>,
    counts_tx: watch::Sender<NotificationCounts>,
    stopped: Arc<AtomicBool>,
}

impl Controller {
    async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        let mut counts_interval = time::interval(Duration::from_secs(
            self.config.counts_poll_interval_seconds.max(1),
        ));
        let mut feed_interval = time::interval(Duration::from_secs(
            self.config.feed_poll_interval_seconds.max(1),
        ));
        counts_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        feed_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut timers = DismissTimers::new();

        loop {
            tokio::select! {
                _ = counts_interval.tick() => self.refresh_counts().await,
                _ = feed_interval.tick() => self.refresh_feed(&mut timers).await,
                cmd = commands.recv() => match cmd {
                    None | Some(Command::Shutdown) => break,
                    Some(cmd) => self.handle_command(cmd, &mut timers).await,
                },
                Some(key) = poll_fn(|cx| timers.poll_expired(cx)), if !timers.is_empty() => {
                    self.auto_dismiss(key);
                }
            }
            if self.is_stopped() {
                break;
            }
        }
        debug!("feed controller task exited");
    }

    async fn handle_command(&mut self, command: Command, timers: &mut DismissTimers) {
        match command {
            Command::Refresh => {
                self.refresh_counts().await;
                self.refresh_feed(timers).await;
            }
            Command::MarkRead(key, reply) => {
                // A key absent from the current feed is a no-op; nothing
                // goes upstream.
                if !self.items.iter().any(|n| n.key == key) {
                    let _ = reply.send(Ok(None));
                    return;
                }
                let result = self.source.mark_read(key).await;
                if result.is_ok() && !self.is_stopped() {
                    timers.cancel(&key);
                    if let Some(item) = self.items.iter_mut().find(|n| n.key == key) {
                        item.read = true;
                    }
                    self.publish_snapshot();
                }
                let _ = reply.send(result.map(Some));
            }
            Command::MarkAllRead(reply) => {
                let result = self.source.mark_all_read().await;
                if result.is_ok() && !self.is_stopped() {
                    timers.clear();
                    for item in &mut self.items {
                        item.read = true;
                    }
                    let _ = self.counts_tx.send(NotificationCounts::default());
                    self.publish_snapshot();
                }
                let _ = reply.send(result);
            }
            Command::Dismiss(key, reply) => {
                let result = self.source.dismiss(key).await;
                if result.is_ok() && !self.is_stopped() {
                    timers.cancel(&key);
                    self.suppressed.insert(key);
                    self.publish_snapshot();
                }
                let _ = reply.send(result);
            }
            // Handled by the run loop.
            Command::Shutdown => {}
        }
    }

    async fn refresh_counts(&mut self) {
        let result = self.source.fetch_counts().await;
        if self.is_stopped() {
            return;
        }
        match result {
            Ok(counts) => {
                let _ = self.counts_tx.send(counts);
            }
            Err(error) => warn!(%error, "counts poll failed, keeping previous badges"),
        }
    }

    async fn refresh_feed(&mut self, timers: &mut DismissTimers) {
        let result = self.source.fetch_feed(Some(self.config.feed_limit)).await;
        if self.is_stopped() {
            return;
        }
        match result {
            Ok(items) => self.apply_feed(items, timers),
            Err(error) => warn!(%error, "feed poll failed, keeping previous snapshot"),
        }
    }

    fn apply_feed(&mut self, items: Vec<Notification>, timers: &mut DismissTimers) {
        let auto_dismiss = Duration::from_secs(self.config.auto_dismiss_seconds);
        for item in &items {
            if item.read || self.suppressed.contains(&item.key) {
                continue;
            }
            // Each key gets exactly one timer, ever; a refetch of a
            // still-unread item must not restart its countdown.
            if self.armed.insert(item.key) {
                timers.arm(item.key, auto_dismiss);
            }
        }
        self.items = items;
        self.publish_snapshot();
    }

    fn auto_dismiss(&mut self, key: NotificationKey) {
        debug!(%key, "auto-dismissing notification");
        self.suppressed.insert(key);
        // Fire-and-forget write-through so the dismissal survives this
        // controller; the local suppression already hides the item.
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            if let Err(error) = source.dismiss(key).await {
                warn!(%key, %error, "auto-dismiss write-through failed");
            }
        });
        self.publish_snapshot();
    }

    fn publish_snapshot(&self) {
        let notifications: Vec<Notification> = self
            .items
            .iter()
            .filter(|n| !self.suppressed.contains(&n.key))
            .cloned()
            .collect();
        let unread = notifications.iter().filter(|n| !n.read).count();
        let _ = self.snapshot_tx.send(FeedSnapshot {
            notifications,
            unread,
            refreshed_at: Some(Utc::now()),
        });
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amoria_core::error::AppError;
    use amoria_entity::notification::NotificationKind;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use uuid::Uuid;

    /// Scripted source: each fetch pops the next result; the final one
    /// repeats once the script runs out.
    #[derive(Debug, Default)]
    struct ScriptedSource {
        counts: Mutex<VecDeque<AppResult<NotificationCounts>>>,
        feeds: Mutex<VecDeque<AppResult<Vec<Notification>>>>,
        marked: Mutex<Vec<NotificationKey>>,
        dismissed: Mutex<Vec<NotificationKey>>,
    }

    impl ScriptedSource {
        fn with_feed(items: Vec<Notification>) -> Self {
            let source = Self::default();
            source.push_feed(Ok(items));
            source.push_counts(Ok(NotificationCounts::default()));
            source
        }

        fn push_feed(&self, result: AppResult<Vec<Notification>>) {
            self.feeds.lock().unwrap().push_back(result);
        }

        fn push_counts(&self, result: AppResult<NotificationCounts>) {
            self.counts.lock().unwrap().push_back(result);
        }

        fn marked(&self) -> Vec<NotificationKey> {
            self.marked.lock().unwrap().clone()
        }

        fn dismissed(&self) -> Vec<NotificationKey> {
            self.dismissed.lock().unwrap().clone()
        }

        fn next<T: Clone + Default>(queue: &Mutex<VecDeque<AppResult<T>>>) -> AppResult<T> {
            let mut queue = queue.lock().unwrap();
            if queue.len() > 1 {
                queue.pop_front().unwrap()
            } else {
                queue.front().cloned().unwrap_or_else(|| Ok(T::default()))
            }
        }
    }

    #[async_trait]
    impl FeedSource for ScriptedSource {
        async fn fetch_counts(&self) -> AppResult<NotificationCounts> {
            Self::next(&self.counts)
        }

        async fn fetch_feed(&self, _limit: Option<u32>) -> AppResult<Vec<Notification>> {
            Self::next(&self.feeds)
        }

        async fn mark_read(&self, key: NotificationKey) -> AppResult<String> {
            self.marked.lock().unwrap().push(key);
            Ok(key.kind.navigation_target().as_path().to_string())
        }

        async fn mark_all_read(&self) -> AppResult<u64> {
            Ok(3)
        }

        async fn dismiss(&self, key: NotificationKey) -> AppResult<()> {
            self.dismissed.lock().unwrap().push(key);
            Ok(())
        }
    }

    fn unread(kind: NotificationKind) -> Notification {
        Notification::new(kind, Uuid::new_v4(), "title", "message", Utc::now(), false)
    }

    fn mount(source: ScriptedSource) -> (Arc<ScriptedSource>, FeedHandle) {
        let source = Arc::new(source);
        let handle = spawn(source.clone(), FeedConfig::default());
        (source, handle)
    }

    async fn first_snapshot(handle: &FeedHandle) -> FeedSnapshot {
        let mut rx = handle.watch_snapshot();
        rx.changed().await.expect("controller should publish");
        let snapshot = rx.borrow().clone();
        snapshot
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_publishes_initial_feed_and_counts() {
        let counts = NotificationCounts {
            matches: 1,
            messages: 2,
            favorites: 0,
            match_requests: 0,
        };
        let source = ScriptedSource::default();
        source.push_feed(Ok(vec![unread(NotificationKind::Like)]));
        source.push_counts(Ok(counts));
        let (_source, handle) = mount(source);

        let snapshot = first_snapshot(&handle).await;
        assert_eq!(snapshot.notifications.len(), 1);
        assert_eq!(snapshot.unread, 1);
        assert!(snapshot.refreshed_at.is_some());

        let mut counts_rx = handle.watch_counts();
        if handle.counts() != counts {
            counts_rx.changed().await.expect("counts should publish");
        }
        assert_eq!(handle.counts(), counts);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unread_items_auto_dismiss_after_display_window() {
        let item = unread(NotificationKind::Message);
        let (_source, handle) = mount(ScriptedSource::with_feed(vec![item]));

        let snapshot = first_snapshot(&handle).await;
        assert_eq!(snapshot.unread, 1);

        // Default display window is 5 seconds.
        time::sleep(Duration::from_secs(6)).await;
        let snapshot = handle.snapshot();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.unread, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mark_read_cancels_the_auto_dismiss_timer() {
        let item = unread(NotificationKind::Like);
        let key = item.key;
        let (source, handle) = mount(ScriptedSource::with_feed(vec![item]));

        first_snapshot(&handle).await;
        let path = handle.mark_read(key).await.expect("mark read");
        assert_eq!(path.as_deref(), Some("/matches"));
        assert_eq!(source.marked(), vec![key]);

        // Well past the display window: the read item must still be there.
        time::sleep(Duration::from_secs(10)).await;
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.notifications.len(), 1);
        assert!(snapshot.notifications[0].read);
        assert_eq!(snapshot.unread, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mark_read_on_unknown_key_is_a_no_op() {
        let item = unread(NotificationKind::Like);
        let (source, handle) = mount(ScriptedSource::with_feed(vec![item]));

        first_snapshot(&handle).await;
        let absent = NotificationKey::new(NotificationKind::Message, Uuid::new_v4());
        let path = handle.mark_read(absent).await.expect("mark read");

        assert_eq!(path, None);
        assert!(source.marked().is_empty());
        assert_eq!(handle.snapshot().unread, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_read_items_never_arm_timers() {
        let mut item = unread(NotificationKind::Match);
        item.read = true;
        let (_source, handle) = mount(ScriptedSource::with_feed(vec![item]));

        first_snapshot(&handle).await;
        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(handle.snapshot().notifications.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismissed_item_does_not_return_on_refetch() {
        let item = unread(NotificationKind::Like);
        let source = ScriptedSource::default();
        // Same unread item on every poll, as long as nobody marks it read.
        source.push_feed(Ok(vec![item.clone()]));
        source.push_feed(Ok(vec![item]));
        source.push_counts(Ok(NotificationCounts::default()));
        let (_source, handle) = mount(source);

        first_snapshot(&handle).await;
        time::sleep(Duration::from_secs(6)).await;
        assert!(handle.snapshot().is_empty());

        // Past the next feed poll at 30s; the refetch must stay hidden.
        time::sleep(Duration::from_secs(30)).await;
        assert!(handle.snapshot().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_writes_through_to_the_source() {
        let item = unread(NotificationKind::Like);
        let key = item.key;
        let (source, handle) = mount(ScriptedSource::with_feed(vec![item]));

        first_snapshot(&handle).await;
        time::sleep(Duration::from_secs(6)).await;
        assert!(handle.snapshot().is_empty());

        // Let the spawned write-through task run.
        tokio::task::yield_now().await;
        assert_eq!(source.dismissed(), vec![key]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_failure_keeps_previous_state() {
        let counts = NotificationCounts {
            matches: 0,
            messages: 5,
            favorites: 0,
            match_requests: 0,
        };
        let source = ScriptedSource::default();
        source.push_feed(Ok(vec![unread(NotificationKind::Message)]));
        source.push_feed(Err(AppError::upstream("connection refused")));
        source.push_counts(Ok(counts));
        source.push_counts(Err(AppError::upstream("connection refused")));
        let (_source, handle) = mount(source);

        first_snapshot(&handle).await;
        // The item auto-dismisses at 5s; both polls fail at 30s.
        time::sleep(Duration::from_secs(40)).await;
        assert_eq!(handle.counts(), counts);
        assert!(handle.snapshot().refreshed_at.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mark_all_read_zeroes_badges_and_items() {
        let source = ScriptedSource::default();
        source.push_feed(Ok(vec![
            unread(NotificationKind::Like),
            unread(NotificationKind::Message),
        ]));
        source.push_counts(Ok(NotificationCounts {
            matches: 0,
            messages: 1,
            favorites: 1,
            match_requests: 0,
        }));
        let (_source, handle) = mount(source);

        first_snapshot(&handle).await;
        let flipped = handle.mark_all_read().await.expect("mark all");
        assert_eq!(flipped, 3);
        assert!(handle.counts().is_empty());

        let snapshot = handle.snapshot();
        assert_eq!(snapshot.unread, 0);
        assert!(snapshot.notifications.iter().all(|n| n.read));

        // Cleared timers must not fire later and hide the read items.
        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(handle.snapshot().notifications.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_hides_item_and_writes_through() {
        let item = unread(NotificationKind::ProfileView);
        let key = item.key;
        let (source, handle) = mount(ScriptedSource::with_feed(vec![item]));

        first_snapshot(&handle).await;
        handle.dismiss(key).await.expect("dismiss");
        assert_eq!(source.dismissed(), vec![key]);
        assert!(handle.snapshot().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_rejects_further_commands() {
        let item = unread(NotificationKind::Like);
        let key = item.key;
        let (_source, handle) = mount(ScriptedSource::with_feed(vec![item]));

        first_snapshot(&handle).await;
        handle.shutdown();
        assert!(handle.is_stopped());
        assert!(handle.mark_read(key).await.is_err());
        assert!(handle.refresh().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_counts_poll_runs_on_the_configured_cadence() {
        let first = NotificationCounts {
            matches: 1,
            messages: 0,
            favorites: 0,
            match_requests: 0,
        };
        let second = NotificationCounts {
            matches: 2,
            messages: 0,
            favorites: 0,
            match_requests: 0,
        };
        let source = ScriptedSource::default();
        source.push_counts(Ok(first));
        source.push_counts(Ok(second));
        source.push_feed(Ok(Vec::new()));
        let (_source, handle) = mount(source);

        let mut counts_rx = handle.watch_counts();
        counts_rx.changed().await.expect("first counts");
        assert_eq!(*counts_rx.borrow_and_update(), first);

        let started = tokio::time::Instant::now();
        counts_rx.changed().await.expect("second counts");
        assert_eq!(*counts_rx.borrow(), second);
        assert!(started.elapsed() >= Duration::from_secs(29));
    }
}
