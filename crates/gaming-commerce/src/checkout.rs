//! Checkout.
//!
//! Placing an order needs a signed-in user and a non-empty cart. There is
//! no payment step and no order store: the caller gets a receipt and the
//! cart is cleared.

use gaming_auth::{require_authenticated, IdentityProvider, UserId};
use serde::{Deserialize, Serialize};

use crate::cart::{CartEngine, CartItem};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Price;

/// Lifecycle state of an order.
///
/// Checkout only produces `Pending`. The later states are the ones a stored
/// order can carry once it is paid for and handed to a rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Shipped,
    Delivered,
    Undelivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Undelivered => "undelivered",
        }
    }
}

/// What the shopper gets back from a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub status: OrderStatus,
    pub total_items: i64,
    pub total: Price,
    /// Unix timestamp.
    pub placed_at: i64,
}

/// Place an order for everything in `cart`.
pub fn checkout(
    cart: &mut CartEngine,
    identity: &dyn IdentityProvider,
) -> Result<OrderReceipt, CommerceError> {
    let user = identity.current_user()?;
    let user = require_authenticated(user.as_ref()).map_err(|_| CommerceError::NotSignedIn)?;
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let receipt = OrderReceipt {
        id: OrderId::generate(),
        user_id: user.id.clone(),
        items: cart.items().to_vec(),
        status: OrderStatus::Pending,
        total_items: cart.total_items(),
        total: cart.total_price(),
        placed_at: current_timestamp(),
    };
    tracing::info!(
        order = %receipt.id,
        user = %receipt.user_id,
        total = %receipt.total,
        "order placed"
    );

    cart.clear();
    Ok(receipt)
}

fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartSnapshot, NotificationKind, RecordingSink};
    use crate::catalog::Catalog;
    use crate::ids::VariantId;
    use gaming_auth::{AuthError, Role, User};
    use gaming_cache::MemoryStore;
    use std::sync::{Arc, Mutex};

    /// Identity stub that reports a fixed user.
    struct FixedIdentity(Mutex<Option<User>>);

    impl FixedIdentity {
        fn signed_in() -> Self {
            Self(Mutex::new(Some(User::new(
                UserId::new("u1"),
                "ada@example.com",
                "Ada",
                Role::Customer,
            ))))
        }

        fn signed_out() -> Self {
            Self(Mutex::new(None))
        }
    }

    impl IdentityProvider for FixedIdentity {
        fn register(&self, _: &str, _: &str, _: &str) -> Result<User, AuthError> {
            Err(AuthError::Forbidden)
        }

        fn sign_in(&self, _: &str, _: &str) -> Result<User, AuthError> {
            Err(AuthError::InvalidCredentials)
        }

        fn sign_out(&self) -> Result<(), AuthError> {
            *self.0.lock().unwrap() = None;
            Ok(())
        }

        fn current_user(&self) -> Result<Option<User>, AuthError> {
            Ok(self.0.lock().unwrap().clone())
        }
    }

    fn cart_with_items(sink: Arc<RecordingSink>) -> CartEngine {
        let catalog = Catalog::builtin();
        let mut cart = CartEngine::open(
            CartSnapshot::new(Arc::new(MemoryStore::new()), "cart"),
            sink,
        );
        let (p, v) = catalog.find_variant(&VariantId::new("4-2")).unwrap();
        cart.add_item(p, v, 2).unwrap();
        cart
    }

    #[test]
    fn test_checkout_requires_sign_in() {
        let sink = Arc::new(RecordingSink::new());
        let mut cart = cart_with_items(sink);

        let err = checkout(&mut cart, &FixedIdentity::signed_out()).unwrap_err();
        assert!(matches!(err, CommerceError::NotSignedIn));
        assert_eq!(err.to_string(), "Please sign in to checkout");
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_checkout_rejects_empty_cart() {
        let sink = Arc::new(RecordingSink::new());
        let mut cart = cart_with_items(sink);
        cart.clear();

        let err = checkout(&mut cart, &FixedIdentity::signed_in()).unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
    }

    #[test]
    fn test_checkout_clears_cart() {
        let sink = Arc::new(RecordingSink::new());
        let mut cart = cart_with_items(sink.clone());
        sink.drain();

        let receipt = checkout(&mut cart, &FixedIdentity::signed_in()).unwrap();
        assert_eq!(receipt.user_id.as_str(), "u1");
        assert_eq!(receipt.status, OrderStatus::Pending);
        assert_eq!(receipt.total_items, 2);
        assert_eq!(receipt.total, Price::from_cents(69998));
        assert_eq!(receipt.items.len(), 1);

        assert!(cart.is_empty());
        let kinds: Vec<_> = sink.drain().into_iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::CartCleared]);
    }

    #[test]
    fn test_order_status_names() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Undelivered,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(serde_json::from_str::<OrderStatus>(&json).unwrap(), status);
        }
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
