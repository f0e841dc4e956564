//! Cart engine behaviour across whole operation sequences.

use std::sync::Arc;

use gaming_cache::{CacheError, FileStore, KeyValueStore, MemoryStore, SharedStore};
use gaming_commerce::cart::DEFAULT_CART_KEY;
use gaming_commerce::prelude::*;

fn product(id: &str, name: &str, cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: String::new(),
        price: Price::from_cents(cents),
        image_url: String::new(),
        category: "consoles".to_string(),
        featured: false,
        variants: Vec::new(),
    }
}

fn variant(product: &Product, id: &str, price: Option<i64>) -> ProductVariant {
    ProductVariant {
        id: VariantId::new(id),
        product_id: product.id.clone(),
        color: "Black".to_string(),
        size: "Standard".to_string(),
        price: price.map(Price::from_cents),
        stock: 10,
        image_url: None,
    }
}

fn engine_on(store: SharedStore, sink: Arc<RecordingSink>) -> CartEngine {
    CartEngine::open(CartSnapshot::new(store, DEFAULT_CART_KEY), sink)
}

fn engine() -> CartEngine {
    engine_on(Arc::new(MemoryStore::new()), Arc::new(RecordingSink::new()))
}

#[test]
fn merge_add_sums_quantities() {
    let a = product("a", "Console A", 10000);
    let va = variant(&a, "a-1", None);

    for (q1, q2) in [(1, 1), (2, 3), (7, 1), (1, 40)] {
        let mut cart = engine();
        cart.add_item(&a, &va, q1).unwrap();
        cart.add_item(&a, &va, q2).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, q1 + q2);
    }
}

#[test]
fn removal_is_idempotent() {
    let a = product("a", "Console A", 10000);
    let b = product("b", "Console B", 20000);
    let (va, vb) = (variant(&a, "a-1", None), variant(&b, "b-1", None));

    let mut once = engine();
    let mut twice = engine();
    for cart in [&mut once, &mut twice] {
        cart.add_item(&a, &va, 1).unwrap();
        cart.add_item(&b, &vb, 2).unwrap();
    }

    once.remove_item(&va.id);
    twice.remove_item(&va.id);
    twice.remove_item(&va.id);
    assert_eq!(once.items(), twice.items());
}

#[test]
fn update_is_absolute() {
    let a = product("a", "Console A", 10000);
    let va = variant(&a, "a-1", None);
    let mut cart = engine();
    cart.add_item(&a, &va, 4).unwrap();

    cart.update_quantity(&va.id, 6);
    cart.update_quantity(&va.id, 2);
    assert_eq!(cart.find(&va.id).unwrap().quantity, 2);
}

#[test]
fn update_to_zero_matches_remove() {
    let a = product("a", "Console A", 10000);
    let b = product("b", "Console B", 20000);
    let (va, vb) = (variant(&a, "a-1", None), variant(&b, "b-1", Some(15000)));

    let mut via_update = engine();
    let mut via_remove = engine();
    for cart in [&mut via_update, &mut via_remove] {
        cart.add_item(&a, &va, 3).unwrap();
        cart.add_item(&b, &vb, 1).unwrap();
    }

    via_update.update_quantity(&va.id, 0);
    via_remove.remove_item(&va.id);
    assert_eq!(via_update.items(), via_remove.items());
}

#[test]
fn totals_match_independent_recomputation() {
    let a = product("a", "Console A", 10000);
    let b = product("b", "Console B", 20000);
    let c = product("c", "Console C", 0);
    let va = variant(&a, "a-1", None);
    let vb = variant(&b, "b-1", Some(17550));
    let vc = variant(&c, "c-1", None);

    let mut cart = engine();
    cart.add_item(&a, &va, 2).unwrap();
    cart.add_item(&b, &vb, 1).unwrap();
    cart.add_item(&c, &vc, 5).unwrap();
    cart.add_item(&a, &va, 1).unwrap();
    cart.update_quantity(&vb.id, 4);
    cart.remove_item(&vc.id);
    let _ = cart.add_item(&c, &vc, 0);

    let expected_items: i64 = cart.items().iter().map(|i| i.quantity).sum();
    let expected_cents: i64 = cart
        .items()
        .iter()
        .map(|i| {
            let unit = i.variant.price.unwrap_or(i.product.price).cents();
            unit * i.quantity
        })
        .sum();

    assert_eq!(cart.total_items(), expected_items);
    assert_eq!(cart.total_items(), 7);
    assert_eq!(cart.total_price().cents(), expected_cents);
    assert_eq!(cart.total_price().cents(), 3 * 10000 + 4 * 17550);
}

#[test]
fn snapshot_round_trip_preserves_order() {
    let catalog = Catalog::builtin();
    let store: SharedStore = Arc::new(MemoryStore::new());
    let mut cart = engine_on(store.clone(), Arc::new(RecordingSink::new()));
    for id in ["6-2", "1-3", "5-1"] {
        let (p, v) = catalog.find_variant(&VariantId::new(id)).unwrap();
        cart.add_item(p, v, 2).unwrap();
    }

    let restored = engine_on(store, Arc::new(RecordingSink::new()));
    assert_eq!(restored.items(), cart.items());
    let ids: Vec<&str> = restored
        .items()
        .iter()
        .map(|i| i.variant_id().as_str())
        .collect();
    assert_eq!(ids, vec!["6-2", "1-3", "5-1"]);
}

#[test]
fn walkthrough_scenario() {
    let sink = Arc::new(RecordingSink::new());
    let mut cart = engine_on(Arc::new(MemoryStore::new()), sink.clone());
    let p_a = product("a", "Console A", 30000);
    let v_a1 = variant(&p_a, "a-1", Some(32500));
    let p_b = product("b", "Pad B", 1000);
    let v_b1 = variant(&p_b, "b-1", None);

    cart.add_item(&p_a, &v_a1, 2).unwrap();
    cart.add_item(&p_a, &v_a1, 3).unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].quantity, 5);

    cart.update_quantity(&v_a1.id, 1);
    assert_eq!(cart.items()[0].quantity, 1);

    cart.add_item(&p_b, &v_b1, 1).unwrap();
    assert_eq!(cart.items()[1].line_total(), Price::from_cents(1000));
    assert_eq!(cart.total_price(), Price::from_cents(32500 + 1000));

    cart.clear();
    assert!(cart.items().is_empty());
    assert_eq!(cart.total_items(), 0);

    let messages: Vec<String> = sink.drain().into_iter().map(|n| n.message).collect();
    assert_eq!(
        messages,
        vec![
            "Added Console A to your cart",
            "Updated Console A quantity",
            "Added Pad B to your cart",
            "Cart cleared",
        ]
    );
}

#[test]
fn items_are_copies_taken_at_add_time() {
    let mut a = product("a", "Console A", 10000);
    let va = variant(&a, "a-1", None);
    let mut cart = engine();
    cart.add_item(&a, &va, 1).unwrap();

    a.price = Price::from_cents(1);
    a.name = "Renamed".to_string();
    assert_eq!(cart.items()[0].product.name, "Console A");
    assert_eq!(cart.total_price(), Price::from_cents(10000));
}

#[test]
fn malformed_snapshots_load_empty_and_stay_untouched() {
    for raw in [
        "not json at all",
        r#"{"product":{},"quantity":1}"#,
        r#"[{"quantity":"three"}]"#,
        "42",
    ] {
        let store: SharedStore = Arc::new(MemoryStore::with_entries([(DEFAULT_CART_KEY, raw)]));
        let cart = engine_on(store.clone(), Arc::new(RecordingSink::new()));

        assert!(cart.is_empty(), "{raw} should load as an empty cart");
        assert_eq!(store.get(DEFAULT_CART_KEY).unwrap().as_deref(), Some(raw));
    }
}

#[test]
fn hand_written_snapshot_is_accepted() {
    let raw = r#"[{
        "product": {"id":"2","name":"Xbox Series X","slug":"xbox-series-x",
                    "description":"","price":499.99,"imageUrl":"/images/xbox-x.png",
                    "category":"consoles","featured":true,"variants":[]},
        "variant": {"id":"2-1","productId":"2","color":"Black","size":"Standard",
                    "price":null,"stock":8},
        "quantity": 2
    }]"#;
    let store: SharedStore = Arc::new(MemoryStore::with_entries([(DEFAULT_CART_KEY, raw)]));
    let cart = engine_on(store, Arc::new(RecordingSink::new()));

    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price().display(), "$999.98");
}

/// Store whose writes always fail.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
        Err(CacheError::StoreError("read-only".to_string()))
    }

    fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(CacheError::StoreError("read-only".to_string()))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(Vec::new())
    }
}

#[test]
fn failed_writes_keep_the_mutation() {
    let a = product("a", "Console A", 10000);
    let va = variant(&a, "a-1", None);
    let mut cart = engine_on(Arc::new(ReadOnlyStore), Arc::new(RecordingSink::new()));

    cart.add_item(&a, &va, 2).unwrap();
    cart.update_quantity(&va.id, 3);
    assert_eq!(cart.total_items(), 3);
    cart.clear();
    assert!(cart.is_empty());
}

#[test]
fn file_store_persists_between_engines() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::builtin();
    let (p, v) = catalog.find_variant(&VariantId::new("3-1")).unwrap();

    {
        let store: SharedStore = Arc::new(FileStore::open(dir.path()).unwrap());
        let mut cart = engine_on(store, Arc::new(RecordingSink::new()));
        cart.add_item(p, v, 2).unwrap();
    }

    let store: SharedStore = Arc::new(FileStore::open(dir.path()).unwrap());
    let cart = engine_on(store, Arc::new(RecordingSink::new()));
    assert_eq!(cart.find(&v.id).unwrap().quantity, 2);
}
