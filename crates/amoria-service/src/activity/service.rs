//! Recent-activity aggregation and platform statistics.

use std::sync::Arc;

use chrono::{DateTime, NaiveTime, Utc};
use tracing::warn;

use amoria_core::config::FeedConfig;
use amoria_core::result::AppResult;
use amoria_core::types::FetchLimit;
use amoria_database::repositories::{
    MatchRepository, MatchWithNames, MemberRepository, MessageRepository, MessageWithSender,
    PhotoRepository, ReportRepository,
};
use amoria_entity::activity::{ActivityItem, ActivityKind, SystemStats};
use amoria_entity::member::Member;

use crate::context::RequestContext;

use super::rank;

/// Aggregates recent platform events for the admin dashboard.
///
/// Every read is admin-gated. Activity aggregation degrades per source:
/// a failing source is logged and skipped so one broken table does not
/// blank the whole feed. Statistics are all-or-nothing, since a partial
/// stats panel would silently misreport the platform.
#[derive(Debug, Clone)]
pub struct ActivityService {
    members: Arc<MemberRepository>,
    matches: Arc<MatchRepository>,
    messages: Arc<MessageRepository>,
    photos: Arc<PhotoRepository>,
    reports: Arc<ReportRepository>,
    config: FeedConfig,
}

impl ActivityService {
    /// Create a new activity service.
    pub fn new(
        members: Arc<MemberRepository>,
        matches: Arc<MatchRepository>,
        messages: Arc<MessageRepository>,
        photos: Arc<PhotoRepository>,
        reports: Arc<ReportRepository>,
        config: FeedConfig,
    ) -> Self {
        Self {
            members,
            matches,
            messages,
            photos,
            reports,
            config,
        }
    }

    /// The merged recent-activity feed, newest first.
    pub async fn recent_activity(
        &self,
        ctx: &RequestContext,
        requested: Option<u32>,
    ) -> AppResult<Vec<ActivityItem>> {
        ctx.require_admin()?;

        let limit = FetchLimit::new(
            self.config.activity_default_limit,
            self.config.activity_max_limit,
        )
        .resolve(requested) as usize;
        let per_source = i64::from(self.config.activity_per_source);

        let (registrations, matches, messages, photo_alert) = tokio::join!(
            self.members.recent(per_source),
            self.matches.recent(per_source),
            self.messages.recent(per_source),
            self.pending_photo_alert(),
        );

        let mut items = Vec::new();
        items.extend(
            collect("registrations", registrations)
                .into_iter()
                .map(registration_item),
        );
        items.extend(collect("matches", matches).into_iter().map(match_item));
        items.extend(collect("messages", messages).into_iter().map(message_item));
        match photo_alert {
            Ok(Some(alert)) => items.push(alert),
            Ok(None) => {}
            Err(error) => {
                warn!(source = "pending_photos", %error, "activity source failed, skipping");
            }
        }

        Ok(rank::merge_and_rank(items, limit))
    }

    /// Today-versus-total platform counters.
    pub async fn system_stats(&self, ctx: &RequestContext) -> AppResult<SystemStats> {
        ctx.require_admin()?;
        let today = start_of_today(ctx.request_time);

        let (
            total_members,
            new_members_today,
            total_matches,
            matches_today,
            total_messages,
            messages_today,
            pending_photos,
            open_reports,
            active_members_today,
        ) = tokio::try_join!(
            self.members.count_all(),
            self.members.count_created_since(today),
            self.matches.count_all(),
            self.matches.count_since(today),
            self.messages.count_all(),
            self.messages.count_since(today),
            self.photos.count_pending(),
            self.reports.count_open(),
            self.members.count_active_since(today),
        )?;

        Ok(SystemStats {
            total_members,
            new_members_today,
            total_matches,
            matches_today,
            total_messages,
            messages_today,
            pending_photos,
            open_reports,
            active_members_today,
        })
    }

    /// Synthetic alert for photos stuck in the moderation queue.
    ///
    /// Derived, not stored: one query returns the count and the newest
    /// upload time together so they can never disagree.
    async fn pending_photo_alert(&self) -> AppResult<Option<ActivityItem>> {
        match self.photos.pending_summary().await? {
            (count, Some(newest)) if count > 0 => Ok(Some(ActivityItem::new(
                ActivityKind::SystemAlert,
                "photo-moderation",
                "Photos pending review",
                describe_pending(count),
                newest,
            ))),
            _ => Ok(None),
        }
    }
}

/// Unwrap one source's rows, downgrading a failure to a warning.
fn collect<T>(source: &str, result: AppResult<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|error| {
        warn!(source, %error, "activity source failed, skipping");
        Vec::new()
    })
}

/// UTC midnight of the day containing `now`.
fn start_of_today(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

fn describe_pending(count: i64) -> String {
    if count == 1 {
        "1 photo is waiting for moderation".to_string()
    } else {
        format!("{count} photos are waiting for moderation")
    }
}

fn registration_item(member: Member) -> ActivityItem {
    ActivityItem::new(
        ActivityKind::UserRegistration,
        member.id,
        "New member registered",
        format!("{} joined the platform", member.display_name),
        member.created_at,
    )
}

fn match_item(m: MatchWithNames) -> ActivityItem {
    ActivityItem::new(
        ActivityKind::NewMatch,
        m.record.id,
        "New match",
        format!("{} and {} matched", m.name_a, m.name_b),
        m.record.matched_at,
    )
}

fn message_item(msg: MessageWithSender) -> ActivityItem {
    ActivityItem::new(
        ActivityKind::Message,
        msg.record.id,
        "New message",
        format!("{} sent a message", msg.sender_name),
        msg.record.sent_at,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    #[test]
    fn test_start_of_today_is_utc_midnight() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 17, 45, 9).unwrap();
        let midnight = start_of_today(now);
        assert_eq!(midnight, Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_describe_pending_pluralizes() {
        assert_eq!(describe_pending(1), "1 photo is waiting for moderation");
        assert_eq!(describe_pending(4), "4 photos are waiting for moderation");
    }

    #[test]
    fn test_registration_item_shape() {
        let member = Member {
            id: Uuid::new_v4(),
            display_name: "Aiko".to_string(),
            email: "aiko@example.com".to_string(),
            role: amoria_entity::member::MemberRole::Member,
            created_at: Utc::now(),
            last_active_at: None,
        };
        let item = registration_item(member.clone());
        assert_eq!(item.id, format!("user_registration-{}", member.id));
        assert_eq!(item.description, "Aiko joined the platform");
        assert_eq!(item.timestamp, member.created_at);
    }

    #[test]
    fn test_collect_swallows_failures() {
        let ok: AppResult<Vec<i32>> = Ok(vec![1, 2]);
        let err: AppResult<Vec<i32>> =
            Err(amoria_core::error::AppError::database("connection reset"));
        assert_eq!(collect("ok", ok), vec![1, 2]);
        assert!(collect("err", err).is_empty());
    }
}
