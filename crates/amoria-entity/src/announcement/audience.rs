//! Announcement audience enumeration.

use serde::{Deserialize, Serialize};

use crate::member::MemberRole;

/// Which roles an announcement targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "announcement_audience", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementAudience {
    /// Every authenticated caller.
    All,
    /// Regular members only.
    Members,
    /// Administrators only.
    Admins,
}

impl AnnouncementAudience {
    /// Whether the given role falls inside this audience.
    pub fn allows(&self, role: MemberRole) -> bool {
        match self {
            Self::All => true,
            Self::Members => role == MemberRole::Member,
            Self::Admins => role == MemberRole::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audience_role_matrix() {
        assert!(AnnouncementAudience::All.allows(MemberRole::Admin));
        assert!(AnnouncementAudience::All.allows(MemberRole::Member));
        assert!(AnnouncementAudience::Members.allows(MemberRole::Member));
        assert!(!AnnouncementAudience::Members.allows(MemberRole::Admin));
        assert!(AnnouncementAudience::Admins.allows(MemberRole::Admin));
        assert!(!AnnouncementAudience::Admins.allows(MemberRole::Member));
    }
}
