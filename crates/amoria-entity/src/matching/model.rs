//! Mutual match entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A mutual match between two members.
///
/// Each side carries its own seen flag, so "new match" badges clear
/// independently for the two members.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Match {
    /// Unique match identifier.
    pub id: Uuid,
    /// First member of the pair.
    pub member_a: Uuid,
    /// Second member of the pair.
    pub member_b: Uuid,
    /// When the match was formed.
    pub matched_at: DateTime<Utc>,
    /// Whether `member_a` has seen this match.
    pub seen_by_a: bool,
    /// Whether `member_b` has seen this match.
    pub seen_by_b: bool,
}

impl Match {
    /// Check whether the given member is part of this match.
    pub fn involves(&self, member: Uuid) -> bool {
        self.member_a == member || self.member_b == member
    }

    /// The other member of the pair, if `member` is part of the match.
    pub fn partner_of(&self, member: Uuid) -> Option<Uuid> {
        if self.member_a == member {
            Some(self.member_b)
        } else if self.member_b == member {
            Some(self.member_a)
        } else {
            None
        }
    }

    /// Whether the given member has seen this match yet.
    pub fn seen_by(&self, member: Uuid) -> bool {
        if self.member_a == member {
            self.seen_by_a
        } else if self.member_b == member {
            self.seen_by_b
        } else {
            true
        }
    }
}
