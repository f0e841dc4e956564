//! Cart line items.

use crate::catalog::{Product, ProductVariant};
use crate::ids::VariantId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// One line of the cart.
///
/// `product` and `variant` are copies taken when the item was added, so
/// later catalog changes never reach items already in a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub product: Product,
    pub variant: ProductVariant,
    /// Always at least 1 while the item is in a cart.
    pub quantity: i64,
}

impl CartItem {
    /// Create a line item.
    pub fn new(product: Product, variant: ProductVariant, quantity: i64) -> Self {
        Self {
            product,
            variant,
            quantity,
        }
    }

    /// The variant this line is keyed on.
    pub fn variant_id(&self) -> &VariantId {
        &self.variant.id
    }

    /// Variant price if set, else the product's base price.
    pub fn effective_price(&self) -> Price {
        self.variant.price.unwrap_or(self.product.price)
    }

    /// `effective_price × quantity`.
    pub fn line_total(&self) -> Price {
        self.effective_price().saturating_mul(self.quantity)
    }
}
