//! Raw key-value slots.
//!
//! A [`KeyValueStore`] holds plain strings under string keys. Two backends
//! ship with the crate: [`MemoryStore`] for tests and ephemeral sessions and
//! [`FileStore`], which keeps one file per key under a directory.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::CacheError;

/// A store shared between the components of one process.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// String slots addressed by key.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// List every key currently stored, sorted.
    fn keys(&self) -> Result<Vec<String>, CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-process store backed by a sorted map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given slots.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let slots = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            slots: RwLock::new(slots),
        }
    }
}

fn poisoned() -> CacheError {
    CacheError::StoreError("memory store lock poisoned".to_string())
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let slots = self.slots.read().map_err(|_| poisoned())?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut slots = self.slots.write().map_err(|_| poisoned())?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut slots = self.slots.write().map_err(|_| poisoned())?;
        slots.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let slots = self.slots.read().map_err(|_| poisoned())?;
        Ok(slots.keys().cloned().collect())
    }
}

/// Directory-backed store with one `<key>.json` file per slot.
///
/// Keys are escaped so that any string maps to a single file name inside
/// the directory. Writes go through a temporary file and a rename, so a
/// crash mid-write leaves the previous value in place.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

const SLOT_EXTENSION: &str = ".json";
const TEMP_EXTENSION: &str = ".json.tmp";

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, CacheError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            CacheError::OpenError(format!("cannot create {}: {}", dir.display(), e))
        })?;
        Ok(Self { dir })
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}{}", encode_key(key), SLOT_EXTENSION))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let path = self.slot_path(key);
        let tmp = self.dir.join(format!("{}{}", encode_key(key), TEMP_EXTENSION));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::trace!(key, path = %path.display(), "slot written");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let name = entry?.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.ends_with(TEMP_EXTENSION) {
                continue;
            }
            if let Some(stem) = name.strip_suffix(SLOT_EXTENSION) {
                if let Some(key) = decode_key(stem) {
                    keys.push(key);
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Escape every byte outside `[A-Za-z0-9_-]` as `%XX`.
fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

fn decode_key(encoded: &str) -> Option<String> {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = encoded.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_delete() {
        let store = MemoryStore::new();
        assert_eq!(store.get("cart").unwrap(), None);

        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
        assert!(store.exists("cart").unwrap());

        store.delete("cart").unwrap();
        assert!(!store.exists("cart").unwrap());

        // Deleting again is fine
        store.delete("cart").unwrap();
    }

    #[test]
    fn test_memory_store_keys_sorted() {
        let store = MemoryStore::with_entries([("b", "2"), ("a", "1")]);
        assert_eq!(store.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_key_encoding() {
        assert_eq!(encode_key("cart"), "cart");
        assert_eq!(encode_key("user:a@b.com"), "user%3Aa%40b%2Ecom");
        assert_eq!(decode_key("user%3Aa%40b%2Ecom").as_deref(), Some("user:a@b.com"));
        assert_eq!(decode_key("bad%4"), None);
        assert_eq!(encode_key("../etc"), "%2E%2E%2Fetc");
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("slots")).unwrap();

        store.set("cart", r#"[{"quantity":1}]"#).unwrap();
        store.set("user:someone@example.com", "{}").unwrap();

        assert_eq!(
            store.get("cart").unwrap().as_deref(),
            Some(r#"[{"quantity":1}]"#)
        );
        assert_eq!(
            store.keys().unwrap(),
            vec!["cart".to_string(), "user:someone@example.com".to_string()]
        );

        // A second handle on the same directory sees the data
        let reopened = FileStore::open(store.dir()).unwrap();
        assert!(reopened.exists("cart").unwrap());

        reopened.delete("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
        reopened.delete("cart").unwrap();
    }

    #[test]
    fn test_file_store_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("cart", "[1]").unwrap();
        store.set("cart", "[2]").unwrap();

        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[2]"));
        assert_eq!(store.keys().unwrap(), vec!["cart".to_string()]);
    }
}
