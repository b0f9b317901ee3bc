//! Auto-dismiss timer bookkeeping.

use std::collections::HashMap;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio_util::time::DelayQueue;
use tokio_util::time::delay_queue;

use amoria_entity::notification::NotificationKey;

/// Pending auto-dismiss timers, one per notification key.
///
/// Wraps a [`DelayQueue`] with a key map so timers can be cancelled by
/// notification key. The map and the queue always agree: every arm
/// inserts into both, every cancel and expiry removes from both.
#[derive(Debug, Default)]
pub(crate) struct DismissTimers {
    queue: DelayQueue<NotificationKey>,
    keys: HashMap<NotificationKey, delay_queue::Key>,
}

impl DismissTimers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Start a timer for the key. An already-armed key is left untouched.
    pub(crate) fn arm(&mut self, key: NotificationKey, after: Duration) {
        if self.keys.contains_key(&key) {
            return;
        }
        let timer = self.queue.insert(key, after);
        self.keys.insert(key, timer);
    }

    /// Cancel the timer for a key, if one is pending.
    pub(crate) fn cancel(&mut self, key: &NotificationKey) {
        if let Some(timer) = self.keys.remove(key) {
            self.queue.remove(&timer);
        }
    }

    /// Cancel every pending timer.
    pub(crate) fn clear(&mut self) {
        self.queue.clear();
        self.keys.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Poll for the next expired timer, unregistering it from the map.
    pub(crate) fn poll_expired(&mut self, cx: &mut Context<'_>) -> Poll<Option<NotificationKey>> {
        match self.queue.poll_expired(cx) {
            Poll::Ready(Some(expired)) => {
                let key = expired.into_inner();
                self.keys.remove(&key);
                Poll::Ready(Some(key))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
