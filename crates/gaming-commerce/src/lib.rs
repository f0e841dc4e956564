//! Storefront core for GamingCart.
//!
//! - **Catalog**: the static product list and its lookups
//! - **Cart**: the cart engine with merge-on-add, derived totals and a
//!   persisted snapshot
//! - **Checkout**: turns a signed-in user's cart into an order receipt
//! - **Storefront**: the context object that owns all of the above
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use gaming_cache::MemoryStore;
//! use gaming_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let store: gaming_cache::SharedStore = Arc::new(MemoryStore::new());
//! let mut cart = CartEngine::open(CartSnapshot::new(store, "cart"), Arc::new(NullSink));
//!
//! let ps5 = catalog.find_by_slug("playstation-5").unwrap();
//! cart.add_item(ps5, &ps5.variants[0], 2).unwrap();
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price().display(), "$999.98");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Price;

    // Catalog
    pub use crate::catalog::{Catalog, Product, ProductVariant, SortOption, StockStatus};

    // Cart
    pub use crate::cart::{
        CartEngine, CartItem, CartSnapshot, Notification, NotificationKind, NotificationSink,
        NullSink, RecordingSink, Severity, TracingSink,
    };

    // Checkout
    pub use crate::checkout::{checkout, OrderReceipt, OrderStatus};

    // Storefront
    pub use crate::storefront::{Storefront, StorefrontOptions};
}
