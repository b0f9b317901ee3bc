//! Announcement eligibility rules.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use amoria_entity::announcement::{Announcement, AnnouncementView};
use amoria_entity::member::MemberRole;

/// A member's aggregated view state for one announcement.
///
/// The view cap counts displays across every session; a dismissal only
/// hides the announcement in the session it happened in.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState {
    /// Total displays across all of the member's sessions.
    pub total_views: i32,
    /// Whether the calling session dismissed the announcement.
    pub dismissed_in_session: bool,
}

/// Collapse a member's view rows into per-announcement state, as seen
/// from one session.
pub fn summarize(views: Vec<AnnouncementView>, session: Uuid) -> HashMap<Uuid, ViewState> {
    let mut states: HashMap<Uuid, ViewState> = HashMap::new();
    for view in views {
        let state = states.entry(view.announcement_id).or_default();
        state.total_views += view.view_count;
        if view.session_id == session && view.dismissed {
            state.dismissed_in_session = true;
        }
    }
    states
}

/// Whether an announcement should be shown to a member right now.
///
/// Checks the display window, the audience, the calling session's
/// dismissal, and the member's total view count against the cap. A member
/// with no view rows yet is always eligible once the window and audience
/// pass.
pub fn eligible(
    announcement: &Announcement,
    state: Option<&ViewState>,
    role: MemberRole,
    now: DateTime<Utc>,
) -> bool {
    if !announcement.is_active_at(now) {
        return false;
    }
    if !announcement.audience.allows(role) {
        return false;
    }
    match state {
        Some(state) => {
            !state.dismissed_in_session && !announcement.view_cap_reached(state.total_views)
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amoria_entity::announcement::AnnouncementAudience;
    use chrono::Duration;

    fn announcement() -> Announcement {
        Announcement {
            id: Uuid::new_v4(),
            title: "Welcome".to_string(),
            body: "New matching features are live".to_string(),
            kind: "info".to_string(),
            audience: AnnouncementAudience::All,
            priority: 0,
            starts_at: Utc::now() - Duration::hours(1),
            ends_at: None,
            max_views: Some(3),
            dismissible: true,
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn view(
        announcement_id: Uuid,
        session_id: Uuid,
        view_count: i32,
        dismissed: bool,
    ) -> AnnouncementView {
        AnnouncementView {
            announcement_id,
            member_id: Uuid::new_v4(),
            session_id,
            view_count,
            dismissed,
            first_viewed_at: Utc::now(),
            last_viewed_at: Utc::now(),
        }
    }

    #[test]
    fn test_fresh_member_is_eligible() {
        assert!(eligible(&announcement(), None, MemberRole::Member, Utc::now()));
    }

    #[test]
    fn test_expired_window_is_ineligible() {
        let mut a = announcement();
        a.ends_at = Some(Utc::now() - Duration::minutes(5));
        assert!(!eligible(&a, None, MemberRole::Member, Utc::now()));
    }

    #[test]
    fn test_audience_excludes_wrong_role() {
        let mut a = announcement();
        a.audience = AnnouncementAudience::Admins;
        assert!(!eligible(&a, None, MemberRole::Member, Utc::now()));
        assert!(eligible(&a, None, MemberRole::Admin, Utc::now()));
    }

    #[test]
    fn test_dismissal_only_blocks_its_own_session() {
        let a = announcement();
        let here = Uuid::new_v4();
        let elsewhere = Uuid::new_v4();

        let states = summarize(vec![view(a.id, elsewhere, 1, true)], here);
        assert!(eligible(&a, states.get(&a.id), MemberRole::Member, Utc::now()));

        let states = summarize(vec![view(a.id, here, 1, true)], here);
        assert!(!eligible(&a, states.get(&a.id), MemberRole::Member, Utc::now()));
    }

    #[test]
    fn test_view_cap_counts_across_sessions() {
        let a = announcement();
        let here = Uuid::new_v4();

        // Two views in each of two sessions against a cap of three.
        let states = summarize(
            vec![
                view(a.id, here, 2, false),
                view(a.id, Uuid::new_v4(), 2, false),
            ],
            here,
        );
        assert!(!eligible(&a, states.get(&a.id), MemberRole::Member, Utc::now()));

        let states = summarize(vec![view(a.id, here, 2, false)], here);
        assert!(eligible(&a, states.get(&a.id), MemberRole::Member, Utc::now()));
    }

    #[test]
    fn test_no_cap_means_unlimited_views() {
        let mut a = announcement();
        a.max_views = None;
        let here = Uuid::new_v4();
        let states = summarize(vec![view(a.id, here, 100, false)], here);
        assert!(eligible(&a, states.get(&a.id), MemberRole::Member, Utc::now()));
    }
}
