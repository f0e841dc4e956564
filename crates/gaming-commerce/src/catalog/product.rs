//! Product and variant types.

use crate::ids::{ProductId, VariantId};
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Stock below this count is reported as low.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Base price, inherited by variants without their own.
    #[serde(default)]
    pub price: Price,
    /// Listing image.
    #[serde(default)]
    pub image_url: String,
    /// Category name (e.g., "consoles").
    pub category: String,
    /// Shown on the landing page.
    #[serde(default)]
    pub featured: bool,
    /// Purchasable variants.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Look up one of this product's variants by ID.
    pub fn variant(&self, id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == id)
    }

    /// Find the variant with the given color and size.
    pub fn find_variant(&self, color: &str, size: &str) -> Option<&ProductVariant> {
        self.variants
            .iter()
            .find(|v| v.color == color && v.size == size)
    }

    /// Distinct variant colors, in catalog order.
    pub fn colors(&self) -> Vec<&str> {
        distinct(self.variants.iter().map(|v| v.color.as_str()))
    }

    /// Distinct variant sizes, in catalog order.
    pub fn sizes(&self) -> Vec<&str> {
        distinct(self.variants.iter().map(|v| v.size.as_str()))
    }

    /// Price a variant of this product sells for.
    pub fn price_of(&self, variant: &ProductVariant) -> Price {
        variant.price.unwrap_or(self.price)
    }

    /// Total stock across all variants.
    pub fn total_stock(&self) -> u32 {
        self.variants.iter().map(|v| v.stock).sum()
    }
}

/// A purchasable color/size combination of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Unique across the whole catalog; carts key on it.
    pub id: VariantId,
    /// Parent product ID.
    pub product_id: ProductId,
    /// Color option.
    pub color: String,
    /// Size/edition option.
    pub size: String,
    /// Price override; `None` means the product's base price.
    #[serde(default)]
    pub price: Option<Price>,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    /// Variant image, if different from the product's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Stock availability of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    /// Plenty left.
    InStock,
    /// Fewer than [`LOW_STOCK_THRESHOLD`] left.
    LowStock(u32),
    /// None left.
    OutOfStock,
}

impl ProductVariant {
    /// Current stock status.
    pub fn stock_status(&self) -> StockStatus {
        match self.stock {
            0 => StockStatus::OutOfStock,
            n if n < LOW_STOCK_THRESHOLD => StockStatus::LowStock(n),
            _ => StockStatus::InStock,
        }
    }

    /// Check if this variant can be bought at all.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Cap a requested quantity at the units in stock.
    pub fn clamp_quantity(&self, requested: i64) -> i64 {
        requested.min(i64::from(self.stock))
    }

    /// Human-readable option label (e.g., "White / Digital Edition").
    pub fn label(&self) -> String {
        format!("{} / {}", self.color, self.size)
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(
        id: &str,
        color: &str,
        size: &str,
        price: Option<i64>,
        stock: u32,
    ) -> ProductVariant {
        ProductVariant {
            id: VariantId::new(id),
            product_id: ProductId::new("1"),
            color: color.to_string(),
            size: size.to_string(),
            price: price.map(Price::from_cents),
            stock,
            image_url: None,
        }
    }

    fn product() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "PlayStation 5".to_string(),
            slug: "playstation-5".to_string(),
            description: String::new(),
            price: Price::from_cents(49999),
            image_url: String::new(),
            category: "consoles".to_string(),
            featured: true,
            variants: vec![
                variant("1-1", "White", "Standard Edition", None, 10),
                variant("1-2", "White", "Digital Edition", Some(39999), 3),
                variant("1-3", "Black", "Standard Edition", Some(54999), 0),
            ],
        }
    }

    #[test]
    fn test_options() {
        let p = product();
        assert_eq!(p.colors(), vec!["White", "Black"]);
        assert_eq!(p.sizes(), vec!["Standard Edition", "Digital Edition"]);
        assert_eq!(p.total_stock(), 13);
    }

    #[test]
    fn test_find_variant() {
        let p = product();
        let found = p.find_variant("Black", "Standard Edition").unwrap();
        assert_eq!(found.id.as_str(), "1-3");
        assert!(p.find_variant("Black", "Digital Edition").is_none());
        assert_eq!(p.variant(&VariantId::new("1-2")).unwrap().color, "White");
    }

    #[test]
    fn test_price_inheritance() {
        let p = product();
        assert_eq!(p.price_of(&p.variants[0]), Price::from_cents(49999));
        assert_eq!(p.price_of(&p.variants[1]), Price::from_cents(39999));
    }

    #[test]
    fn test_stock_status() {
        let p = product();
        assert_eq!(p.variants[0].stock_status(), StockStatus::InStock);
        assert_eq!(p.variants[1].stock_status(), StockStatus::LowStock(3));
        assert_eq!(p.variants[2].stock_status(), StockStatus::OutOfStock);
        assert!(!p.variants[2].is_in_stock());
    }

    #[test]
    fn test_clamp_quantity() {
        let p = product();
        assert_eq!(p.variants[1].clamp_quantity(2), 2);
        assert_eq!(p.variants[1].clamp_quantity(7), 3);
    }

    #[test]
    fn test_json_shape() {
        let v = variant("1-2", "White", "Digital Edition", None, 15);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["productId"], "1");
        assert!(json["price"].is_null());
        assert!(json.get("imageUrl").is_none());
    }
}
