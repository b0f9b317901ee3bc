//! Pure helpers for turning domain rows into one ordered feed.

use std::collections::HashSet;

use amoria_entity::notification::{Notification, NotificationKey};

/// Character budget for message bodies embedded in notifications.
pub const PREVIEW_MAX_CHARS: usize = 80;

/// Shorten a message body for display inside a notification.
///
/// Truncation counts characters, not bytes, so multi-byte text never
/// splits mid-codepoint.
pub fn preview(body: &str, max_chars: usize) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_none() {
        head
    } else {
        format!("{}...", head.trim_end())
    }
}

/// Drop duplicate keys, keeping the first occurrence.
///
/// Sources should never overlap, but the merge does not rely on that.
pub fn dedup_by_key(items: Vec<Notification>) -> Vec<Notification> {
    let mut seen: HashSet<NotificationKey> = HashSet::with_capacity(items.len());
    items.into_iter().filter(|n| seen.insert(n.key)).collect()
}

/// Sort newest first with a stable key tiebreak, then truncate.
pub fn order_and_truncate(mut items: Vec<Notification>, limit: usize) -> Vec<Notification> {
    items.sort_by(|a, b| {
        b.timestamp.cmp(&a.timestamp).then_with(|| {
            (a.key.kind.as_str(), a.key.source_id).cmp(&(b.key.kind.as_str(), b.key.source_id))
        })
    });
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use amoria_entity::notification::NotificationKind;
    use chrono::{DateTime, Duration, Utc};
    use uuid::Uuid;

    fn notification(kind: NotificationKind, id: Uuid, at: DateTime<Utc>) -> Notification {
        Notification::new(kind, id, "title", "message", at, false)
    }

    #[test]
    fn test_preview_passes_short_bodies_through() {
        assert_eq!(preview("hello", 80), "hello");
        assert_eq!(preview("", 80), "");
    }

    #[test]
    fn test_preview_truncates_long_bodies() {
        let body = "a".repeat(100);
        let out = preview(&body, 80);
        assert_eq!(out, format!("{}...", "a".repeat(80)));
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let body = "こんにちは、今夜は空いていますか";
        let out = preview(body, 5);
        assert_eq!(out, "こんにちは...");
    }

    #[test]
    fn test_preview_exact_length_is_untouched() {
        let body = "x".repeat(80);
        assert_eq!(preview(&body, 80), body);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let first = notification(NotificationKind::Like, id, now);
        let dupe = notification(NotificationKind::Like, id, now - Duration::minutes(1));
        let other = notification(NotificationKind::Message, Uuid::new_v4(), now);

        let out = dedup_by_key(vec![first.clone(), dupe, other]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].timestamp, first.timestamp);
    }

    #[test]
    fn test_same_uuid_different_kind_is_not_a_duplicate() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let out = dedup_by_key(vec![
            notification(NotificationKind::Like, id, now),
            notification(NotificationKind::Match, id, now),
        ]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_order_newest_first_and_truncated() {
        let now = Utc::now();
        let old = notification(NotificationKind::Like, Uuid::new_v4(), now - Duration::hours(2));
        let mid = notification(NotificationKind::Match, Uuid::new_v4(), now - Duration::hours(1));
        let new = notification(NotificationKind::Message, Uuid::new_v4(), now);

        let out = order_and_truncate(vec![old, new.clone(), mid.clone()], 2);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].key, new.key);
        assert_eq!(out[1].key, mid.key);
    }

    #[test]
    fn test_order_is_stable_on_timestamp_ties() {
        let now = Utc::now();
        let a = notification(NotificationKind::Like, Uuid::new_v4(), now);
        let b = notification(NotificationKind::Message, Uuid::new_v4(), now);

        let forward: Vec<_> = order_and_truncate(vec![a.clone(), b.clone()], 10)
            .into_iter()
            .map(|n| n.key)
            .collect();
        let reversed: Vec<_> = order_and_truncate(vec![b, a], 10)
            .into_iter()
            .map(|n| n.key)
            .collect();
        assert_eq!(forward, reversed);
    }
}
