//! Product catalog module.
//!
//! Contains the product and variant types and the static catalog store.

mod builtin;
mod product;
mod store;

pub use product::{Product, ProductVariant, StockStatus, LOW_STOCK_THRESHOLD};
pub use store::{Catalog, SortOption};
