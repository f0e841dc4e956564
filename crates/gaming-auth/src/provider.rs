//! Identity providers.

use std::collections::HashSet;

use gaming_cache::{cache_key, Cache, Session, SessionId};
use serde::{Deserialize, Serialize};

use crate::user::{Account, Role, User, UserId};
use crate::{AuthError, PasswordHasher};

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Slot holding the id of the session that is currently signed in.
const ACTIVE_SESSION_KEY: &str = "auth:active";

/// The narrow identity surface the storefront depends on.
pub trait IdentityProvider: Send + Sync {
    /// Create an account and sign it in.
    fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError>;

    /// Sign in with email and password.
    fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Sign out. Signing out while signed out is a no-op.
    fn sign_out(&self) -> Result<(), AuthError>;

    /// The signed-in user, if any.
    fn current_user(&self) -> Result<Option<User>, AuthError>;

    /// Whether somebody is signed in.
    fn is_authenticated(&self) -> Result<bool, AuthError> {
        Ok(self.current_user()?.is_some())
    }

    /// Role of the signed-in user.
    fn role(&self) -> Result<Option<Role>, AuthError> {
        Ok(self.current_user()?.map(|u| u.role))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActiveSession {
    user_id: UserId,
    email: String,
}

/// Identity provider backed by the local key-value store.
///
/// Accounts live under `user:<email>`; the signed-in session is a
/// [`Session`] record whose id is kept in a single pointer slot, so the
/// sign-in survives reopening the store.
pub struct LocalIdentityProvider {
    accounts: Cache,
    sessions: Session<ActiveSession>,
    hasher: PasswordHasher,
    admin_emails: HashSet<String>,
}

impl LocalIdentityProvider {
    /// Create a provider over `cache`.
    pub fn new(cache: Cache) -> Self {
        Self {
            sessions: Session::new(cache.clone()),
            accounts: cache,
            hasher: PasswordHasher::default(),
            admin_emails: HashSet::new(),
        }
    }

    /// Use a specific password hasher.
    pub fn with_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Emails that receive the admin role when they register.
    pub fn with_admin_emails<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.admin_emails = emails
            .into_iter()
            .map(|e| normalize_email(e.as_ref()))
            .collect();
        self
    }

    /// Look up an account by email.
    pub fn find_account(&self, email: &str) -> Result<Option<Account>, AuthError> {
        Ok(self.accounts.get(&account_key(&normalize_email(email)))?)
    }

    /// All registered users, ordered by email.
    pub fn users(&self) -> Result<Vec<User>, AuthError> {
        let mut users = Vec::new();
        for key in self.accounts.keys_with_prefix("user:")? {
            if let Some(account) = self.accounts.get::<Account>(&key)? {
                users.push(account.user);
            }
        }
        Ok(users)
    }

    /// Change the role of an existing account.
    pub fn set_role(&self, email: &str, role: Role) -> Result<User, AuthError> {
        let email = normalize_email(email);
        let mut account = self
            .find_account(&email)?
            .ok_or_else(|| AuthError::UserNotFound(email.clone()))?;
        account.user.role = role;
        self.accounts.set(&account_key(&email), &account)?;
        tracing::info!(email = %email, role = %role, "role updated");
        Ok(account.user)
    }

    fn start_session(&self, user: &User) -> Result<(), AuthError> {
        self.sign_out()?;
        let id = SessionId::generate();
        self.sessions.set(
            &id,
            &ActiveSession {
                user_id: user.id.clone(),
                email: user.email.clone(),
            },
        )?;
        self.accounts.set(ACTIVE_SESSION_KEY, &id)?;
        Ok(())
    }

    fn active_session_id(&self) -> Result<Option<SessionId>, AuthError> {
        Ok(self.accounts.get::<SessionId>(ACTIVE_SESSION_KEY)?)
    }
}

impl IdentityProvider for LocalIdentityProvider {
    fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::InvalidName);
        }
        let email = normalize_email(email);
        validate_email(&email)?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        if self.find_account(&email)?.is_some() {
            return Err(AuthError::UserAlreadyExists(email));
        }

        let role = if self.admin_emails.contains(&email) {
            Role::Admin
        } else {
            Role::Customer
        };
        let user = User::new(UserId::generate(), email.clone(), name, role);
        let account = Account {
            user: user.clone(),
            password_hash: self.hasher.hash(password)?,
            created_at: current_timestamp(),
        };
        self.accounts.set(&account_key(&email), &account)?;
        tracing::info!(email = %email, role = %role, "account registered");

        self.start_session(&user)?;
        Ok(user)
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = normalize_email(email);
        let Some(account) = self.find_account(&email)? else {
            tracing::debug!(email = %email, "sign-in for unknown email");
            return Err(AuthError::InvalidCredentials);
        };
        if !self.hasher.verify(password, &account.password_hash)? {
            tracing::debug!(email = %email, "sign-in with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        self.start_session(&account.user)?;
        tracing::info!(email = %email, "signed in");
        Ok(account.user)
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(id) = self.active_session_id()? {
            self.sessions.delete(&id)?;
            self.accounts.delete(ACTIVE_SESSION_KEY)?;
            tracing::info!("signed out");
        }
        Ok(())
    }

    fn current_user(&self) -> Result<Option<User>, AuthError> {
        let Some(id) = self.active_session_id()? else {
            return Ok(None);
        };
        let Some(session) = self.sessions.get(&id)? else {
            tracing::warn!(session = %id, "active session record is missing");
            return Ok(None);
        };
        match self.find_account(&session.email)? {
            Some(account) if account.user.id == session.user_id => Ok(Some(account.user)),
            _ => {
                tracing::warn!(email = %session.email, "session points at a missing account");
                Ok(None)
            }
        }
    }
}

fn account_key(email: &str) -> String {
    cache_key!("user", email)
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    };
    if valid && !email.chars().any(char::is_whitespace) {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail(email.to_string()))
    }
}

fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
