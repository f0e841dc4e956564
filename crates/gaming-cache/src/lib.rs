//! Durable local key-value storage for GamingCart.
//!
//! Slots hold raw strings behind the [`KeyValueStore`] trait. The typed
//! [`Cache`] wrapper adds JSON serialization on top, and [`Session`] keeps
//! versioned session records in the same store.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use gaming_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(Arc::new(MemoryStore::new()));
//! cache.set("greeting", &vec!["hello".to_string()]).unwrap();
//!
//! let value: Option<Vec<String>> = cache.get("greeting").unwrap();
//! assert_eq!(value, Some(vec!["hello".to_string()]));
//! ```

mod error;
mod kv;
mod session;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use session::{Session, SessionData, SessionId};
pub use store::{FileStore, KeyValueStore, MemoryStore, SharedStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Cache, CacheError, FileStore, KeyValueStore, MemoryStore, Session, SessionId, SharedStore,
    };
}
