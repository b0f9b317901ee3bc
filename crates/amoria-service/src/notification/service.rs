//! Notification feed service.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;

use amoria_core::config::FeedConfig;
use amoria_core::result::AppResult;
use amoria_core::types::{
    AdminMessageId, FavoriteId, FetchLimit, MatchId, MatchRequestId, MemberId, MessageId,
    ProfileViewId, ReportId,
};
use amoria_database::repositories::{
    AdminMessageRepository, AdminMessageWithMember, DismissalRepository, FavoriteRepository,
    FavoriteWithActor, MatchRepository, MatchRequestRepository, MatchWithNames, MessageRepository,
    MessageWithSender, ProfileViewRepository, ReportRepository, ReportWithNames,
    RequestWithRequester, ViewWithViewer,
};
use amoria_entity::notification::{
    NavigationTarget, Notification, NotificationCounts, NotificationKey, NotificationKind,
};

use crate::context::RequestContext;

use super::assemble::{self, PREVIEW_MAX_CHARS};

/// Assembles notifications from domain rows and tracks read state.
///
/// There is no notifications table. The feed is derived at read time from
/// the unseen rows of each domain table, filtered against the caller's
/// durable dismissals, merged, and truncated. Read state lives on the
/// domain rows themselves.
#[derive(Debug, Clone)]
pub struct NotificationService {
    matches: Arc<MatchRepository>,
    messages: Arc<MessageRepository>,
    favorites: Arc<FavoriteRepository>,
    requests: Arc<MatchRequestRepository>,
    profile_views: Arc<ProfileViewRepository>,
    reports: Arc<ReportRepository>,
    support: Arc<AdminMessageRepository>,
    dismissals: Arc<DismissalRepository>,
    config: FeedConfig,
}

impl NotificationService {
    /// Create a new notification service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        matches: Arc<MatchRepository>,
        messages: Arc<MessageRepository>,
        favorites: Arc<FavoriteRepository>,
        requests: Arc<MatchRequestRepository>,
        profile_views: Arc<ProfileViewRepository>,
        reports: Arc<ReportRepository>,
        support: Arc<AdminMessageRepository>,
        dismissals: Arc<DismissalRepository>,
        config: FeedConfig,
    ) -> Self {
        Self {
            matches,
            messages,
            favorites,
            requests,
            profile_views,
            reports,
            support,
            dismissals,
            config,
        }
    }

    /// Per-category badge counts for the caller.
    ///
    /// All-or-nothing: a wrong badge number is worse than a failed poll,
    /// which clients simply retry on the next interval.
    pub async fn counts(&self, ctx: &RequestContext) -> AppResult<NotificationCounts> {
        let member = ctx.member_id;
        let (matches, messages, favorites, match_requests) = tokio::try_join!(
            self.matches.count_unseen_for(member),
            self.messages.count_unread_for(member),
            self.favorites.count_unseen_for(member),
            self.requests.count_pending_unseen_for(member),
        )?;
        Ok(NotificationCounts {
            matches,
            messages,
            favorites,
            match_requests,
        })
    }

    /// The caller's assembled notification feed, newest first.
    ///
    /// Degrades per source: a failing source is logged and skipped. The
    /// dismissal lookup is load-bearing, though; failing open there would
    /// resurrect notifications the member already dismissed.
    pub async fn feed(
        &self,
        ctx: &RequestContext,
        requested: Option<u32>,
    ) -> AppResult<Vec<Notification>> {
        let limit =
            FetchLimit::new(self.config.feed_limit, self.config.feed_max_limit).resolve(requested)
                as usize;
        let per_source = i64::from(self.config.per_source_limit);
        let member = ctx.member_id;

        let dismissed: HashSet<NotificationKey> = self
            .dismissals
            .find_for_session(member, ctx.session_id)
            .await?
            .iter()
            .map(|d| d.key())
            .collect();

        let (favorites, matches, messages, requests, views) = tokio::join!(
            self.favorites.unseen_for(member, per_source),
            self.matches.unseen_for(member, per_source),
            self.messages.unread_for(member, per_source),
            self.requests.pending_unseen_for(member, per_source),
            self.profile_views.unseen_for(member, per_source),
        );

        let mut items = Vec::new();
        items.extend(
            collect("favorites", favorites)
                .into_iter()
                .map(like_notification),
        );
        items.extend(
            collect("matches", matches)
                .into_iter()
                .map(|m| match_notification(member, m)),
        );
        items.extend(
            collect("messages", messages)
                .into_iter()
                .map(message_notification),
        );
        items.extend(
            collect("match_requests", requests)
                .into_iter()
                .map(request_notification),
        );
        items.extend(
            collect("profile_views", views)
                .into_iter()
                .map(view_notification),
        );

        if ctx.is_admin() {
            let (reports, support) = tokio::join!(
                self.reports.open_unseen(per_source),
                self.support.unseen(per_source),
            );
            items.extend(
                collect("reports", reports)
                    .into_iter()
                    .map(report_notification),
            );
            items.extend(
                collect("support", support)
                    .into_iter()
                    .map(support_notification),
            );
        }

        items.retain(|n| !dismissed.contains(&n.key));
        Ok(assemble::order_and_truncate(
            assemble::dedup_by_key(items),
            limit,
        ))
    }

    /// Mark one notification read and report where the client should go.
    ///
    /// Flips the seen/read flag on the underlying domain row. Unknown or
    /// already-read rows affect nothing; that is still success, so retries
    /// and double-clicks stay harmless.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        key: NotificationKey,
    ) -> AppResult<NavigationTarget> {
        if key.kind.is_admin_only() {
            ctx.require_admin()?;
        }
        let member = ctx.member_id;
        match key.kind {
            NotificationKind::Like => {
                self.favorites
                    .mark_seen(FavoriteId::from(key.source_id), member)
                    .await?;
            }
            NotificationKind::Match => {
                self.matches
                    .mark_seen(MatchId::from(key.source_id), member)
                    .await?;
            }
            NotificationKind::Message => {
                self.messages
                    .mark_read(MessageId::from(key.source_id), member)
                    .await?;
            }
            NotificationKind::MatchRequest => {
                self.requests
                    .mark_seen(MatchRequestId::from(key.source_id), member)
                    .await?;
            }
            NotificationKind::ProfileView => {
                self.profile_views
                    .mark_seen(ProfileViewId::from(key.source_id), member)
                    .await?;
            }
            NotificationKind::Report => {
                self.reports.mark_seen(ReportId::from(key.source_id)).await?;
            }
            NotificationKind::AdminMessage => {
                self.support
                    .mark_seen(AdminMessageId::from(key.source_id))
                    .await?;
            }
        }
        Ok(key.kind.navigation_target())
    }

    /// Mark everything read for the caller. Returns total flipped rows.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<u64> {
        let member = ctx.member_id;
        let (matches, messages, favorites, requests, views) = tokio::try_join!(
            self.matches.mark_all_seen_for(member),
            self.messages.mark_all_read_for(member),
            self.favorites.mark_all_seen_for(member),
            self.requests.mark_all_seen_for(member),
            self.profile_views.mark_all_seen_for(member),
        )?;
        let mut total = matches + messages + favorites + requests + views;

        if ctx.is_admin() {
            let (reports, support) =
                tokio::try_join!(self.reports.mark_all_seen(), self.support.mark_all_seen())?;
            total += reports + support;
        }
        Ok(total)
    }

    /// Dismiss one notification for the caller's session.
    ///
    /// Records a durable dismissal keyed on the notification, so the item
    /// never reappears in this session. Idempotent.
    pub async fn dismiss(&self, ctx: &RequestContext, key: NotificationKey) -> AppResult<()> {
        if key.kind.is_admin_only() {
            ctx.require_admin()?;
        }
        self.dismissals
            .upsert(key, ctx.member_id, ctx.session_id)
            .await
    }
}

/// Unwrap one source's rows, downgrading a failure to a warning.
fn collect<T>(source: &str, result: AppResult<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|error| {
        warn!(source, %error, "feed source failed, skipping");
        Vec::new()
    })
}

fn like_notification(f: FavoriteWithActor) -> Notification {
    Notification::new(
        NotificationKind::Like,
        f.record.id,
        "New like",
        format!("{} likes your profile", f.actor_name),
        f.record.created_at,
        f.record.is_seen,
    )
    .with_actor(f.record.member_id, f.actor_name)
}

fn match_notification(member: MemberId, m: MatchWithNames) -> Notification {
    let caller = member.into_uuid();
    let (partner_id, partner_name) = if m.record.member_a == caller {
        (m.record.member_b, m.name_b)
    } else {
        (m.record.member_a, m.name_a)
    };
    Notification::new(
        NotificationKind::Match,
        m.record.id,
        "It's a match!",
        format!("You and {partner_name} liked each other"),
        m.record.matched_at,
        m.record.seen_by(caller),
    )
    .with_actor(partner_id, partner_name)
}

fn message_notification(msg: MessageWithSender) -> Notification {
    Notification::new(
        NotificationKind::Message,
        msg.record.id,
        format!("New message from {}", msg.sender_name),
        assemble::preview(&msg.record.body, PREVIEW_MAX_CHARS),
        msg.record.sent_at,
        msg.record.is_read,
    )
    .with_actor(msg.record.sender_id, msg.sender_name)
}

fn request_notification(r: RequestWithRequester) -> Notification {
    Notification::new(
        NotificationKind::MatchRequest,
        r.record.id,
        "New match request",
        format!("{} wants to match with you", r.requester_name),
        r.record.created_at,
        r.record.is_seen,
    )
    .with_actor(r.record.requester_id, r.requester_name)
}

fn view_notification(v: ViewWithViewer) -> Notification {
    Notification::new(
        NotificationKind::ProfileView,
        v.record.id,
        "Profile view",
        format!("{} viewed your profile", v.viewer_name),
        v.record.viewed_at,
        v.record.is_seen,
    )
    .with_actor(v.record.viewer_id, v.viewer_name)
}

fn report_notification(r: ReportWithNames) -> Notification {
    Notification::new(
        NotificationKind::Report,
        r.record.id,
        "New report",
        format!("{} reported {}", r.reporter_name, r.reported_name),
        r.record.created_at,
        r.record.is_seen,
    )
    .with_actor(r.record.reporter_id, r.reporter_name)
}

fn support_notification(s: AdminMessageWithMember) -> Notification {
    let body = assemble::preview(&s.record.body, PREVIEW_MAX_CHARS);
    Notification::new(
        NotificationKind::AdminMessage,
        s.record.id,
        "New support message",
        format!("{}: {body}", s.member_name),
        s.record.created_at,
        s.record.is_seen,
    )
    .with_actor(s.record.member_id, s.member_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use amoria_entity::matching::Match;
    use amoria_entity::message::Message;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_match_notification_names_the_partner() {
        let caller = MemberId::new();
        let partner = Uuid::new_v4();
        let m = MatchWithNames {
            record: Match {
                id: Uuid::new_v4(),
                member_a: partner,
                member_b: caller.into_uuid(),
                matched_at: Utc::now(),
                seen_by_a: true,
                seen_by_b: false,
            },
            name_a: "Haruka".to_string(),
            name_b: "Caller".to_string(),
        };

        let n = match_notification(caller, m);
        assert_eq!(n.message, "You and Haruka liked each other");
        assert_eq!(n.actor_name.as_deref(), Some("Haruka"));
        assert_eq!(n.actor_id, Some(partner));
        assert!(!n.read);
    }

    #[test]
    fn test_message_notification_previews_long_bodies() {
        let msg = MessageWithSender {
            record: Message {
                id: Uuid::new_v4(),
                sender_id: Uuid::new_v4(),
                recipient_id: Uuid::new_v4(),
                body: "b".repeat(200),
                sent_at: Utc::now(),
                is_read: false,
            },
            sender_name: "Kenji".to_string(),
        };

        let n = message_notification(msg);
        assert_eq!(n.title, "New message from Kenji");
        assert!(n.message.ends_with("..."));
        assert!(n.message.chars().count() <= PREVIEW_MAX_CHARS + 3);
    }

    #[test]
    fn test_notification_keys_match_their_kind() {
        let f = FavoriteWithActor {
            record: amoria_entity::favorite::Favorite {
                id: Uuid::new_v4(),
                member_id: Uuid::new_v4(),
                target_id: Uuid::new_v4(),
                created_at: Utc::now(),
                is_seen: false,
            },
            actor_name: "Mio".to_string(),
        };
        let id = f.record.id;
        let n = like_notification(f);
        assert_eq!(n.key.to_string(), format!("like-{id}"));
    }
}
