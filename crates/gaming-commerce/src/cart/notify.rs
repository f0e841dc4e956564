//! User-facing cart notifications.

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// What happened to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ItemAdded,
    ItemQuantityUpdated,
    ItemRemoved,
    CartCleared,
    /// An add was rejected for a non-positive quantity.
    InvalidQuantity,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::ItemAdded => "item_added",
            NotificationKind::ItemQuantityUpdated => "item_quantity_updated",
            NotificationKind::ItemRemoved => "item_removed",
            NotificationKind::CartCleared => "cart_cleared",
            NotificationKind::InvalidQuantity => "invalid_quantity",
        }
    }
}

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// A message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn item_added(product_name: &str) -> Self {
        Self {
            kind: NotificationKind::ItemAdded,
            message: format!("Added {product_name} to your cart"),
            severity: Severity::Success,
        }
    }

    pub fn quantity_updated(product_name: &str) -> Self {
        Self {
            kind: NotificationKind::ItemQuantityUpdated,
            message: format!("Updated {product_name} quantity"),
            severity: Severity::Success,
        }
    }

    pub fn item_removed(product_name: &str) -> Self {
        Self {
            kind: NotificationKind::ItemRemoved,
            message: format!("Removed {product_name} from your cart"),
            severity: Severity::Info,
        }
    }

    pub fn cart_cleared() -> Self {
        Self {
            kind: NotificationKind::CartCleared,
            message: "Cart cleared".to_string(),
            severity: Severity::Info,
        }
    }

    pub fn invalid_quantity() -> Self {
        Self {
            kind: NotificationKind::InvalidQuantity,
            message: "Quantity must be greater than 0".to_string(),
            severity: Severity::Error,
        }
    }
}

/// Where notifications are delivered.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notification: Notification) {}
}

/// Emits each notification as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        let kind = notification.kind.as_str();
        match notification.severity {
            Severity::Error => tracing::warn!(kind, "{}", notification.message),
            Severity::Success | Severity::Info => {
                tracing::info!(kind, "{}", notification.message)
            }
        }
    }
}

/// Buffers notifications until the view layer drains them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    buffer: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every buffered notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *buffer)
    }

    /// Copy of the buffer without consuming it.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Notification::item_added("Xbox Series X").message,
            "Added Xbox Series X to your cart"
        );
        assert_eq!(
            Notification::quantity_updated("Xbox Series X").message,
            "Updated Xbox Series X quantity"
        );
        assert_eq!(
            Notification::item_removed("Xbox Series X").severity,
            Severity::Info
        );
        assert_eq!(Notification::invalid_quantity().severity, Severity::Error);
    }

    #[test]
    fn test_recording_sink_drain() {
        let sink = RecordingSink::new();
        sink.notify(Notification::cart_cleared());
        sink.notify(Notification::item_added("PlayStation 5"));

        assert_eq!(sink.snapshot().len(), 2);
        let drained = sink.drain();
        assert_eq!(drained[0].kind, NotificationKind::CartCleared);
        assert_eq!(drained[1].kind, NotificationKind::ItemAdded);
        assert!(sink.drain().is_empty());
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&NotificationKind::ItemQuantityUpdated).unwrap();
        assert_eq!(json, r#""item_quantity_updated""#);
        let json = serde_json::to_string(&Severity::Success).unwrap();
        assert_eq!(json, r#""success""#);
    }
}
