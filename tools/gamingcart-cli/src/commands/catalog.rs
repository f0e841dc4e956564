//! Catalog browsing commands.

use anyhow::{bail, Result};

use super::{ProductArgs, ProductsArgs};
use crate::context::Context;
use crate::output::stock_badge;

/// Run the products command.
pub fn list(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.shop.catalog();

    if let Some(category) = &args.category {
        if !catalog.categories().contains(&category.as_str()) {
            bail!(
                "Unknown category '{}' (available: {})",
                category,
                catalog.categories().join(", ")
            );
        }
    }

    let mut products = catalog.sorted(args.category.as_deref(), args.sort);
    if args.featured {
        products.retain(|p| p.featured);
    }

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", args.sort));
    if products.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }

    let widths = [24, 32, 14, 10];
    ctx.output
        .table_row(&["SLUG", "NAME", "CATEGORY", "FROM"], &widths);
    for product in products {
        let from = product
            .variants
            .iter()
            .map(|v| product.price_of(v))
            .min()
            .unwrap_or(product.price);
        let name = if product.featured {
            format!("{} ★", product.name)
        } else {
            product.name.clone()
        };
        ctx.output.table_row(
            &[&product.slug, &name, &product.category, &from.display()],
            &widths,
        );
    }
    Ok(())
}

/// Run the product command.
pub fn show(args: ProductArgs, ctx: &Context) -> Result<()> {
    let Some(product) = ctx.shop.catalog().find_by_slug(&args.slug) else {
        bail!("Product not found: {}", args.slug);
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    if !product.description.is_empty() {
        println!("  {}", product.description);
    }
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv("Colors", &product.colors().join(", "));
    ctx.output.kv("Sizes", &product.sizes().join(", "));

    ctx.output.header("Options");
    let widths = [6, 32, 10, 16];
    ctx.output
        .table_row(&["ID", "OPTION", "PRICE", "STOCK"], &widths);
    for variant in &product.variants {
        ctx.output.table_row(
            &[
                variant.id.as_str(),
                &variant.label(),
                &product.price_of(variant).display(),
                &stock_badge(variant.stock_status()),
            ],
            &widths,
        );
    }
    Ok(())
}
