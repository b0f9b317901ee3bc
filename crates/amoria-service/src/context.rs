//! Per-request caller identity, extracted from a verified access token.

use amoria_core::error::AppError;
use amoria_core::result::AppResult;
use amoria_core::types::{MemberId, SessionId};
use amoria_entity::member::MemberRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity and session data for the member making a request.
///
/// Built once per request from validated JWT claims and passed by
/// reference to every service call that acts on the caller's behalf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Authenticated member.
    pub member_id: MemberId,
    /// Browser session the token was minted for. Dismissals are scoped
    /// to this, so a fresh login starts with a clean slate.
    pub session_id: SessionId,
    /// Role captured at token mint time.
    pub role: MemberRole,
    /// Display name, carried in claims to avoid a lookup per request.
    pub display_name: String,
    /// When the request started processing.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(
        member_id: MemberId,
        session_id: SessionId,
        role: MemberRole,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            member_id,
            session_id,
            role,
            display_name: display_name.into(),
            request_time: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Fails with `Forbidden` unless the caller is an administrator.
    pub fn require_admin(&self) -> AppResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::forbidden("Administrator access required"))
        }
    }
}
