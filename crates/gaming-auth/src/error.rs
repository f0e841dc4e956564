//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// User already exists.
    #[error("an account already exists for {0}")]
    UserAlreadyExists(String),

    /// User not found.
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// Email address is not usable.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// Display name is empty.
    #[error("name must not be empty")]
    InvalidName,

    /// Password too weak.
    #[error("password too weak: {0}")]
    WeakPassword(String),

    /// Nobody is signed in.
    #[error("please sign in to continue")]
    Unauthenticated,

    /// Signed in, but the role is not allowed here.
    #[error("insufficient permissions")]
    Forbidden,

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Cache error.
    #[error("cache error: {0}")]
    Cache(#[from] gaming_cache::CacheError),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials | AuthError::Unauthenticated)
    }

    /// Check if this is a permission error.
    pub fn is_permission_error(&self) -> bool {
        matches!(self, AuthError::Forbidden)
    }
}
