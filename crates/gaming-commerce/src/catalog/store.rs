//! In-memory catalog lookups.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Product, ProductVariant};
use crate::error::CommerceError;
use crate::ids::{ProductId, VariantId};

/// Listing order for product pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Featured products first, otherwise catalog order.
    #[default]
    Featured,
    /// Cheapest first.
    PriceLowHigh,
    /// Most expensive first.
    PriceHighLow,
    /// Alphabetical.
    NameAZ,
    /// Reverse alphabetical.
    NameZA,
}

impl SortOption {
    /// Every option, in menu order.
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::PriceLowHigh,
        SortOption::PriceHighLow,
        SortOption::NameAZ,
        SortOption::NameZA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceLowHigh => "price-low-high",
            SortOption::PriceHighLow => "price-high-low",
            SortOption::NameAZ => "name-a-z",
            SortOption::NameZA => "name-z-a",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Featured => b.featured.cmp(&a.featured),
            SortOption::PriceLowHigh => a.price.cmp(&b.price),
            SortOption::PriceHighLow => b.price.cmp(&a.price),
            SortOption::NameAZ => compare_names(a, b),
            SortOption::NameZA => compare_names(b, a),
        }
    }
}

fn compare_names(a: &Product, b: &Product) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| CommerceError::InvalidSortOption(s.to_string()))
    }
}

/// The product catalog.
///
/// Immutable once built; every lookup is a linear scan, which is plenty
/// for a storefront of this size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub(super) products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product or variant IDs.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut product_ids = HashSet::new();
        let mut variant_ids = HashSet::new();
        for product in &products {
            if !product_ids.insert(&product.id) {
                return Err(CommerceError::Catalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            for variant in &product.variants {
                if !variant_ids.insert(&variant.id) {
                    return Err(CommerceError::Catalog(format!(
                        "duplicate variant id {}",
                        variant.id
                    )));
                }
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Every product, in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    pub fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn filter_featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Products of an optional category in the requested order.
    ///
    /// Sorting is stable, so ties keep catalog order.
    pub fn sorted(&self, category: Option<&str>, sort: SortOption) -> Vec<&Product> {
        let mut products: Vec<&Product> = match category {
            Some(category) => self.filter_by_category(category),
            None => self.products.iter().collect(),
        };
        products.sort_by(|a, b| sort.compare(a, b));
        products
    }

    /// Find a variant anywhere in the catalog.
    pub fn find_variant(&self, id: &VariantId) -> Option<(&Product, &ProductVariant)> {
        self.products
            .iter()
            .find_map(|p| p.variant(id).map(|v| (p, v)))
    }

    /// Resolve a product slug plus optional color/size to one variant.
    ///
    /// Missing options fall back to the product's first color and first
    /// size, the way the product page preselects them.
    pub fn resolve_variant(
        &self,
        slug: &str,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Result<(&Product, &ProductVariant), CommerceError> {
        let product = self
            .find_by_slug(slug)
            .ok_or_else(|| CommerceError::ProductNotFound(slug.to_string()))?;

        let color = color.or_else(|| product.colors().first().copied());
        let size = size.or_else(|| product.sizes().first().copied());
        let variant = match (color, size) {
            (Some(color), Some(size)) => product.find_variant(color, size),
            _ => None,
        };

        variant.map(|v| (product, v)).ok_or_else(|| {
            CommerceError::VariantNotFound(format!(
                "{} ({} / {})",
                slug,
                color.unwrap_or("-"),
                size.unwrap_or("-")
            ))
        })
    }
}
