//! Gating of views by sign-in state and role.

use crate::{AuthError, Role, User};

/// Require a signed-in user.
pub fn require_authenticated(user: Option<&User>) -> Result<&User, AuthError> {
    user.ok_or(AuthError::Unauthenticated)
}

/// Require a signed-in user whose role is one of `allowed`.
pub fn require_role<'a>(user: Option<&'a User>, allowed: &[Role]) -> Result<&'a User, AuthError> {
    let user = require_authenticated(user)?;
    if allowed.contains(&user.role) {
        Ok(user)
    } else {
        tracing::debug!(role = %user.role, ?allowed, "access denied");
        Err(AuthError::Forbidden)
    }
}
