//! The storefront context.
//!
//! Everything a view needs (catalog, cart and identity) is built once by
//! [`Storefront::open`] and handed to the view layer explicitly. Nothing
//! here is global.

use std::sync::Arc;

use gaming_auth::IdentityProvider;
use gaming_cache::SharedStore;

use crate::cart::{CartEngine, CartItem, CartSnapshot, NotificationSink, DEFAULT_CART_KEY};
use crate::catalog::Catalog;
use crate::checkout::{self, OrderReceipt};
use crate::error::CommerceError;

/// Settings for [`Storefront::open`].
#[derive(Debug, Clone)]
pub struct StorefrontOptions {
    pub catalog: Catalog,
    /// Slot the cart snapshot lives in.
    pub cart_key: String,
}

impl Default for StorefrontOptions {
    fn default() -> Self {
        Self {
            catalog: Catalog::builtin(),
            cart_key: DEFAULT_CART_KEY.to_string(),
        }
    }
}

/// Catalog, cart and identity for one shopper.
pub struct Storefront<I> {
    catalog: Catalog,
    cart: CartEngine,
    identity: I,
}

impl<I: IdentityProvider> Storefront<I> {
    /// Build the context and restore the saved cart from `store`.
    pub fn open(
        options: StorefrontOptions,
        store: SharedStore,
        identity: I,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let cart = CartEngine::open(CartSnapshot::new(store, options.cart_key), notifier);
        tracing::debug!(
            products = options.catalog.len(),
            cart_items = cart.len(),
            "storefront opened"
        );
        Self {
            catalog: options.catalog,
            cart,
            identity,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartEngine {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartEngine {
        &mut self.cart
    }

    pub fn identity(&self) -> &I {
        &self.identity
    }

    /// Add a product by slug, picking the variant from color and size.
    pub fn add_to_cart(
        &mut self,
        slug: &str,
        color: Option<&str>,
        size: Option<&str>,
        quantity: i64,
    ) -> Result<&CartItem, CommerceError> {
        let (product, variant) = self.catalog.resolve_variant(slug, color, size)?;
        self.cart.add_item(product, variant, quantity)
    }

    /// Check out the cart as the signed-in user.
    pub fn checkout(&mut self) -> Result<OrderReceipt, CommerceError> {
        checkout::checkout(&mut self.cart, &self.identity)
    }

    /// Release the context. The snapshot slot is left as the last
    /// mutation wrote it.
    pub fn shutdown(self) {
        tracing::debug!(cart_items = self.cart.len(), "storefront closed");
    }
}
