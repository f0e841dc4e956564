//! Session records kept in the key-value store.

use crate::{cache_key, Cache, CacheError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A unique session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random session ID.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Get the session ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Session data stored in the cache.
///
/// Generic over the user data type `T`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData<T> {
    /// The session ID.
    pub id: SessionId,
    /// User-defined session data.
    pub data: T,
    /// Incremented on every write.
    pub version: u64,
    /// When the session was created (Unix timestamp).
    pub created_at: u64,
    /// When the session was last written (Unix timestamp).
    pub last_accessed: u64,
}

/// Session manager over a [`Cache`].
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use gaming_cache::{Cache, MemoryStore, Session, SessionId};
///
/// let session = Session::<String>::new(Cache::new(Arc::new(MemoryStore::new())));
/// let id = SessionId::generate();
///
/// session.set(&id, &"user_42".to_string()).unwrap();
/// assert_eq!(session.get(&id).unwrap().as_deref(), Some("user_42"));
/// ```
pub struct Session<T> {
    cache: Cache,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Session<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Create a session manager backed by `cache`.
    pub fn new(cache: Cache) -> Self {
        Self {
            cache,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get session data if it exists.
    pub fn get(&self, id: &SessionId) -> Result<Option<T>, CacheError> {
        Ok(self.get_versioned(id)?.map(|s| s.data))
    }

    /// Get full session data including version.
    pub fn get_versioned(&self, id: &SessionId) -> Result<Option<SessionData<T>>, CacheError> {
        self.cache.get::<SessionData<T>>(&session_key(id))
    }

    /// Set session data, bumping the version and keeping the creation time.
    pub fn set(&self, id: &SessionId, data: &T) -> Result<SessionData<T>, CacheError> {
        let now = current_timestamp();
        let (version, created_at) = match self.get_versioned(id)? {
            Some(existing) => (existing.version + 1, existing.created_at),
            None => (1, now),
        };

        let session_data = SessionData {
            id: id.clone(),
            data: data.clone(),
            version,
            created_at,
            last_accessed: now,
        };
        self.cache.set(&session_key(id), &session_data)?;
        Ok(session_data)
    }

    /// Delete a session.
    pub fn delete(&self, id: &SessionId) -> Result<(), CacheError> {
        self.cache.delete(&session_key(id))
    }

    /// Check if a session exists.
    pub fn exists(&self, id: &SessionId) -> Result<bool, CacheError> {
        self.cache.exists(&session_key(id))
    }
}

fn session_key(id: &SessionId) -> String {
    cache_key!("session", id)
}

fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
