//! The built-in gaming catalog.

use crate::catalog::{Catalog, Product, ProductVariant};
use crate::ids::{ProductId, VariantId};
use crate::money::Price;

struct VariantSeed {
    id: &'static str,
    color: &'static str,
    size: &'static str,
    cents: i64,
    stock: u32,
    image: &'static str,
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    slug: &str,
    description: &str,
    cents: i64,
    image: &str,
    category: &str,
    featured: bool,
    variants: &[VariantSeed],
) -> Product {
    let product_id = ProductId::new(id);
    Product {
        id: product_id.clone(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
        price: Price::from_cents(cents),
        image_url: image.to_string(),
        category: category.to_string(),
        featured,
        variants: variants
            .iter()
            .map(|seed| ProductVariant {
                id: VariantId::new(seed.id),
                product_id: product_id.clone(),
                color: seed.color.to_string(),
                size: seed.size.to_string(),
                price: Some(Price::from_cents(seed.cents)),
                stock: seed.stock,
                image_url: Some(seed.image.to_string()),
            })
            .collect(),
    }
}

impl Catalog {
    /// The storefront's own six-product catalog.
    pub fn builtin() -> Self {
        Self {
            products: builtin_products(),
        }
    }
}

#[rustfmt::skip]
fn builtin_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "PlayStation 5",
            "playstation-5",
            "Experience lightning-fast loading with an ultra-high-speed SSD, deeper immersion \
             with support for haptic feedback, adaptive triggers, and 3D Audio, and an all-new \
             generation of incredible PlayStation games.",
            49999,
            "/images/playstation5.jpg",
            "consoles",
            true,
            &[
                VariantSeed { id: "1-1", color: "White", size: "Standard Edition", cents: 49999, stock: 10, image: "/images/ps5.png" },
                VariantSeed { id: "1-2", color: "White", size: "Digital Edition", cents: 39999, stock: 15, image: "/images/ps5-digital.png" },
                VariantSeed { id: "1-3", color: "Black", size: "Standard Edition", cents: 54999, stock: 5, image: "/images/ps5-black.png" },
            ],
        ),
        product(
            "2",
            "Xbox Series X",
            "xbox-series-x",
            "The most powerful Xbox ever. Explore rich new worlds with 12 teraflops of raw \
             graphic processing power, DirectX ray tracing, a custom SSD, and 4K gaming.",
            49999,
            "/images/xbox-x.png",
            "consoles",
            true,
            &[
                VariantSeed { id: "2-1", color: "Black", size: "Standard", cents: 49999, stock: 8, image: "/images/xbox-x.png" },
            ],
        ),
        product(
            "3",
            "Xbox Series S",
            "xbox-series-s",
            "The smallest, sleekest Xbox ever. Experience the speed and performance of a \
             next-gen all-digital console at an accessible price point.",
            29999,
            "/images/xbox-s.png",
            "consoles",
            false,
            &[
                VariantSeed { id: "3-1", color: "White", size: "Digital Edition", cents: 29999, stock: 12, image: "/images/xbox-s.png" },
                VariantSeed { id: "3-2", color: "Black", size: "Digital Edition", cents: 34999, stock: 6, image: "/images/xbox-s-black.png" },
            ],
        ),
        product(
            "4",
            "Nintendo Switch OLED",
            "nintendo-switch-oled",
            "Featuring a vibrant 7-inch OLED screen, a wide adjustable stand, a dock with a \
             wired LAN port, 64 GB of internal storage, and enhanced audio.",
            34999,
            "/images/switch-oled.png",
            "consoles",
            true,
            &[
                VariantSeed { id: "4-1", color: "White", size: "OLED Model", cents: 34999, stock: 15, image: "/images/switch-oled.png" },
                VariantSeed { id: "4-2", color: "Neon Blue/Red", size: "OLED Model", cents: 34999, stock: 10, image: "/images/switch-oled-neon.png" },
            ],
        ),
        product(
            "5",
            "PS5 DualSense Controller",
            "ps5-dualsense-controller",
            "Discover a deeper, highly immersive gaming experience with the innovative new PS5 \
             controller, featuring haptic feedback and dynamic trigger effects.",
            6999,
            "/images/dualsense.png",
            "accessories",
            false,
            &[
                VariantSeed { id: "5-1", color: "White", size: "Standard", cents: 6999, stock: 20, image: "/images/dualsense.png" },
                VariantSeed { id: "5-2", color: "Midnight Black", size: "Standard", cents: 6999, stock: 18, image: "/images/dualsense-black.png" },
                VariantSeed { id: "5-3", color: "Cosmic Red", size: "Standard", cents: 7499, stock: 15, image: "/images/dualsense-red.png" },
            ],
        ),
        product(
            "6",
            "Xbox Elite Controller Series 2",
            "xbox-elite-controller-series-2",
            "The world's most advanced controller. Designed to meet the needs of today's \
             competitive gamers with new interchangeable thumbsticks and paddle shapes.",
            17999,
            "/images/xbox-elite.png",
            "accessories",
            true,
            &[
                VariantSeed { id: "6-1", color: "Black", size: "Elite", cents: 17999, stock: 8, image: "/images/xbox-elite.png" },
                VariantSeed { id: "6-2", color: "White", size: "Elite", cents: 17999, stock: 5, image: "/images/xbox-elite-white.png" },
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_are_unique() {
        let products = builtin_products();
        assert!(Catalog::new(products).is_ok());
    }

    #[test]
    fn test_builtin_variants_point_at_parent() {
        let catalog = Catalog::builtin();
        for product in catalog.all() {
            assert!(!product.variants.is_empty());
            for variant in &product.variants {
                assert_eq!(variant.product_id, product.id);
            }
        }
    }
}
