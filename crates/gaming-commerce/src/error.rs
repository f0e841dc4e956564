//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Non-positive quantity passed to an add.
    #[error("Quantity must be greater than 0 (got {0})")]
    InvalidQuantity(i64),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Variant not found.
    #[error("Variant not found: {0}")]
    VariantNotFound(String),

    /// Unknown product sort option.
    #[error("Unknown sort option: {0}")]
    InvalidSortOption(String),

    /// Catalog data is inconsistent.
    #[error("Invalid catalog: {0}")]
    Catalog(String),

    /// Checkout without a signed-in user.
    #[error("Please sign in to checkout")]
    NotSignedIn,

    /// Checkout of an empty cart.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Identity provider failure.
    #[error("Identity error: {0}")]
    Auth(#[from] gaming_auth::AuthError),
}
