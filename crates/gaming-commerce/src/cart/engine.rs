//! The cart engine.

use std::sync::Arc;

use crate::cart::{CartItem, CartSnapshot, Notification, NotificationSink};
use crate::catalog::{Product, ProductVariant};
use crate::error::CommerceError;
use crate::ids::VariantId;
use crate::money::Price;

/// Owns the cart's line items.
///
/// Items keep insertion order and hold at most one line per variant, each
/// with a quantity of at least 1. Every operation runs to completion
/// before returning and saves the whole item list to the snapshot slot.
pub struct CartEngine {
    items: Vec<CartItem>,
    snapshot: CartSnapshot,
    notifier: Arc<dyn NotificationSink>,
}

impl CartEngine {
    /// Create the engine, restoring whatever the snapshot slot holds.
    pub fn open(snapshot: CartSnapshot, notifier: Arc<dyn NotificationSink>) -> Self {
        let items = snapshot.load();
        Self {
            items,
            snapshot,
            notifier,
        }
    }

    /// Add `quantity` units of a variant.
    ///
    /// A variant already in the cart has `quantity` added to its existing
    /// line; otherwise a new line is appended.
    pub fn add_item(
        &mut self,
        product: &Product,
        variant: &ProductVariant,
        quantity: i64,
    ) -> Result<&CartItem, CommerceError> {
        if quantity < 1 {
            self.notifier.notify(Notification::invalid_quantity());
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let index = match self.position(&variant.id) {
            Some(index) => {
                let existing = &mut self.items[index];
                existing.quantity = existing.quantity.saturating_add(quantity);
                tracing::debug!(
                    variant = %variant.id,
                    quantity = existing.quantity,
                    "cart line merged"
                );
                self.notifier
                    .notify(Notification::quantity_updated(&product.name));
                index
            }
            None => {
                self.items
                    .push(CartItem::new(product.clone(), variant.clone(), quantity));
                tracing::debug!(variant = %variant.id, quantity, "cart line added");
                self.notifier.notify(Notification::item_added(&product.name));
                self.items.len() - 1
            }
        };

        self.persist();
        Ok(&self.items[index])
    }

    /// Remove the line for `variant_id`, returning it if it was present.
    pub fn remove_item(&mut self, variant_id: &VariantId) -> Option<CartItem> {
        let removed = self
            .position(variant_id)
            .map(|index| self.items.remove(index));

        if let Some(item) = &removed {
            tracing::debug!(variant = %variant_id, "cart line removed");
            self.notifier
                .notify(Notification::item_removed(&item.product.name));
        }
        self.persist();
        removed
    }

    /// Set the quantity of a line to exactly `quantity`.
    ///
    /// Zero or less removes the line. Returns whether a line for
    /// `variant_id` was found.
    pub fn update_quantity(&mut self, variant_id: &VariantId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(variant_id).is_some();
        }

        let found = match self.items.iter_mut().find(|i| &i.variant.id == variant_id) {
            Some(item) => {
                item.quantity = quantity;
                tracing::debug!(variant = %variant_id, quantity, "cart line quantity set");
                true
            }
            None => false,
        };
        self.persist();
        found
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
        self.notifier.notify(Notification::cart_cleared());
        self.persist();
    }

    /// Current lines, in display order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Line for a variant, if present.
    pub fn find(&self, variant_id: &VariantId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.variant.id == variant_id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of `effective price × quantity` over all lines.
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    fn position(&self, variant_id: &VariantId) -> Option<usize> {
        self.items.iter().position(|i| &i.variant.id == variant_id)
    }

    fn persist(&self) {
        self.snapshot.save(&self.items);
    }
}
