//! Identity for GamingCart.
//!
//! The storefront only ever talks to an [`IdentityProvider`]: who is signed
//! in and with which [`Role`]. [`LocalIdentityProvider`] implements it on top
//! of the local key-value store, and the guards in [`access`] turn the
//! signal into allow/deny decisions for gated views.

pub mod access;
mod error;
mod password;
mod provider;
mod user;

pub use access::{require_authenticated, require_role};
pub use error::AuthError;
pub use password::PasswordHasher;
pub use provider::{IdentityProvider, LocalIdentityProvider, MIN_PASSWORD_LENGTH};
pub use user::{Account, Role, User, UserId};
