//! Persisted cart snapshots.

use gaming_cache::{Cache, CacheError, SharedStore};

use crate::cart::CartItem;

/// Slot the cart is stored under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "cart";

/// The single key-value slot holding a cart's item array.
///
/// Reads and writes never fail outward: a slot that cannot be read or
/// parsed loads as an empty cart, and a failed write is logged and
/// dropped. The stored value is only ever replaced by a write.
#[derive(Clone)]
pub struct CartSnapshot {
    cache: Cache,
    key: String,
}

impl CartSnapshot {
    pub fn new(store: SharedStore, key: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(store),
            key: key.into(),
        }
    }

    /// Read the stored items, falling back to an empty cart.
    pub fn load(&self) -> Vec<CartItem> {
        match self.cache.get::<Vec<CartItem>>(&self.key) {
            Ok(Some(items)) => {
                let count = items.len();
                let items = normalize(items);
                if items.len() != count {
                    tracing::warn!(
                        key = %self.key,
                        stored = count,
                        kept = items.len(),
                        "saved cart had invalid or duplicate lines"
                    );
                }
                tracing::debug!(key = %self.key, items = items.len(), "cart restored");
                items
            }
            Ok(None) => Vec::new(),
            Err(CacheError::SerializeError(e)) => {
                tracing::warn!(key = %self.key, error = %e, "failed to parse saved cart");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read saved cart");
                Vec::new()
            }
        }
    }

    /// Write the full item sequence, logging any failure.
    pub fn save(&self, items: &[CartItem]) {
        match self.cache.set(&self.key, items) {
            Ok(()) => tracing::trace!(key = %self.key, items = items.len(), "cart saved"),
            Err(e) => tracing::warn!(key = %self.key, error = %e, "failed to save cart"),
        }
    }
}

/// Drop lines with a quantity below one and fold duplicate variants into
/// their first occurrence.
fn normalize(items: Vec<CartItem>) -> Vec<CartItem> {
    let mut kept: Vec<CartItem> = Vec::with_capacity(items.len());
    for item in items {
        if item.quantity < 1 {
            continue;
        }
        match kept.iter_mut().find(|k| k.variant.id == item.variant.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => kept.push(item),
        }
    }
    kept
}
