//! JWT claims structure used in access tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use amoria_core::types::{MemberId, SessionId};
use amoria_entity::member::MemberRole;

/// JWT claims payload embedded in every access token.
///
/// The session id travels in the token: every session-scoped operation
/// (dismissals, announcement views) takes it from here rather than from
/// any ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the member ID.
    pub sub: MemberId,
    /// Session ID this token belongs to.
    pub sid: SessionId,
    /// Member role at the time of token issuance.
    pub role: MemberRole,
    /// Display name for convenience.
    pub name: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the member ID from the subject claim.
    pub fn member_id(&self) -> MemberId {
        self.sub
    }

    /// Returns the session ID.
    pub fn session_id(&self) -> SessionId {
        self.sid
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_uuid_strings() {
        let claims = Claims {
            sub: MemberId::new(),
            sid: SessionId::new(),
            role: MemberRole::Member,
            name: "Yuki".to_string(),
            iat: 0,
            exp: i64::MAX,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["sub"], serde_json::json!(claims.sub.to_string()));
        assert_eq!(json["sid"], serde_json::json!(claims.sid.to_string()));
        assert_eq!(json["role"], serde_json::json!("member"));
    }
}
