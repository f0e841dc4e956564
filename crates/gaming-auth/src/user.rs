//! User types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create an ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh user ID.
    pub fn generate() -> Self {
        let token = gaming_cache::SessionId::generate();
        Self(format!("user_{}", token.as_str().trim_start_matches("sess_")))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User role for gating views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Regular shopper.
    #[default]
    Customer,
    /// Store administrator.
    Admin,
    /// Delivery rider.
    Rider,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
            Role::Rider => "rider",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customer" => Ok(Role::Customer),
            "admin" => Ok(Role::Admin),
            "rider" => Ok(Role::Rider),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Stored roles that no longer parse (or were never set) read as customers.
impl From<String> for Role {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// A signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Email address (normalized to lower case).
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Role used for gating.
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Create a user.
    pub fn new(id: UserId, email: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            role,
        }
    }

    /// Get display name, falling back to the email.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Check if user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Check if user is a rider.
    pub fn is_rider(&self) -> bool {
        self.role == Role::Rider
    }
}

/// Stored account record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Public user profile.
    pub user: User,
    /// Argon2 PHC string.
    pub password_hash: String,
    /// Unix timestamp of registration.
    pub created_at: i64,
}
