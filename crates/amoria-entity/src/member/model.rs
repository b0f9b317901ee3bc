//! Member entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::MemberRole;

/// A registered member of the platform.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    /// Unique member identifier.
    pub id: Uuid,
    /// Human-readable display name shown across the platform.
    pub display_name: String,
    /// Email address.
    pub email: String,
    /// Member role (RBAC).
    pub role: MemberRole,
    /// Registration time. Non-null by schema; activity feeds rely on it.
    pub created_at: DateTime<Utc>,
    /// Last time the member was seen active.
    pub last_active_at: Option<DateTime<Utc>>,
}

impl Member {
    /// Check if this member has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if the member was active on or after the given instant.
    pub fn active_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_active_at.map(|t| t >= cutoff).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(role: MemberRole) -> Member {
        Member {
            id: Uuid::new_v4(),
            display_name: "Yuki".to_string(),
            email: "yuki@example.com".to_string(),
            role,
            created_at: Utc::now(),
            last_active_at: None,
        }
    }

    #[test]
    fn test_admin_flag_follows_role() {
        assert!(sample(MemberRole::Admin).is_admin());
        assert!(!sample(MemberRole::Member).is_admin());
    }

    #[test]
    fn test_active_since() {
        let mut member = sample(MemberRole::Member);
        let cutoff = Utc::now() - Duration::hours(1);
        assert!(!member.active_since(cutoff));

        member.last_active_at = Some(Utc::now());
        assert!(member.active_since(cutoff));

        member.last_active_at = Some(cutoff - Duration::hours(2));
        assert!(!member.active_since(cutoff));
    }
}
