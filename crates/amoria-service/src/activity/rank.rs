//! Ordering for merged activity feeds.

use amoria_entity::activity::ActivityItem;

/// Sort merged items newest first and truncate to `limit`.
///
/// Ties on timestamp are broken by id, so the ordering is stable across
/// refetches regardless of which source produced each item.
pub fn merge_and_rank(mut items: Vec<ActivityItem>, limit: usize) -> Vec<ActivityItem> {
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use amoria_entity::activity::ActivityKind;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn item(kind: ActivityKind, age_minutes: i64) -> ActivityItem {
        ActivityItem::new(
            kind,
            Uuid::new_v4(),
            "title",
            "description",
            Utc::now() - Duration::minutes(age_minutes),
        )
    }

    #[test]
    fn test_orders_newest_first_across_kinds() {
        let newest = item(ActivityKind::Message, 1);
        let middle = item(ActivityKind::UserRegistration, 5);
        let oldest = item(ActivityKind::NewMatch, 60);

        let ranked = merge_and_rank(
            vec![oldest.clone(), newest.clone(), middle.clone()],
            10,
        );
        let ids: Vec<_> = ranked.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let items: Vec<_> = (0..8).map(|n| item(ActivityKind::Message, n)).collect();
        assert_eq!(merge_and_rank(items, 3).len(), 3);
    }

    #[test]
    fn test_timestamp_ties_break_by_id() {
        let ts = Utc::now();
        let mut a = item(ActivityKind::Message, 0);
        let mut b = item(ActivityKind::NewMatch, 0);
        a.timestamp = ts;
        b.timestamp = ts;

        let forward = merge_and_rank(vec![a.clone(), b.clone()], 10);
        let reversed = merge_and_rank(vec![b, a], 10);
        let forward_ids: Vec<_> = forward.iter().map(|i| i.id.clone()).collect();
        let reversed_ids: Vec<_> = reversed.iter().map(|i| i.id.clone()).collect();
        assert_eq!(forward_ids, reversed_ids);
    }
}
