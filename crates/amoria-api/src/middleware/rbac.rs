//! RBAC helpers for role-based route guarding.

use amoria_core::error::AppError;
use amoria_entity::member::MemberRole;

use crate::extractors::AuthUser;

/// Checks that the authenticated member has the Admin role.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != MemberRole::Admin {
        return Err(AppError::forbidden("Administrator access required"));
    }
    Ok(())
}
