//! Shopping cart module.
//!
//! The [`CartEngine`] owns the ordered line items, applies the four cart
//! operations, derives totals on every read and writes a [`CartSnapshot`]
//! after each mutation. User-facing messages go out through a
//! [`NotificationSink`].

mod engine;
mod item;
mod notify;
mod snapshot;

pub use engine::CartEngine;
pub use item::CartItem;
pub use notify::{
    Notification, NotificationKind, NotificationSink, NullSink, RecordingSink, Severity,
    TracingSink,
};
pub use snapshot::{CartSnapshot, DEFAULT_CART_KEY};
