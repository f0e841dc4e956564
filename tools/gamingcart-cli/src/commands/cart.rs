//! Cart commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use gaming_commerce::prelude::VariantId;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &mut Context) -> Result<()> {
    match args.command {
        Some(CartCommand::Show) | None => {
            ctx.output.cart(ctx.shop.cart());
            Ok(())
        }
        Some(CartCommand::Add {
            slug,
            color,
            size,
            quantity,
        }) => add(&slug, color.as_deref(), size.as_deref(), quantity, ctx),
        Some(CartCommand::Update { variant, quantity }) => update(&variant, quantity, ctx),
        Some(CartCommand::Remove { variant }) => remove(&variant, ctx),
        Some(CartCommand::Clear { yes }) => clear(yes, ctx),
    }
}

fn add(
    slug: &str,
    color: Option<&str>,
    size: Option<&str>,
    quantity: i64,
    ctx: &mut Context,
) -> Result<()> {
    let (color, size, quantity) = {
        let (product, variant) = ctx.shop.catalog().resolve_variant(slug, color, size)?;
        if !variant.is_in_stock() {
            bail!("{} ({}) is out of stock", product.name, variant.label());
        }

        let allowed = variant.clamp_quantity(quantity);
        if allowed < quantity {
            ctx.output.warn(&format!(
                "Only {} of {} in stock, adding {}",
                variant.stock,
                variant.label(),
                allowed
            ));
        }
        (variant.color.clone(), variant.size.clone(), allowed)
    };

    let result = ctx
        .shop
        .add_to_cart(slug, Some(&color), Some(&size), quantity)
        .map(|line| line.variant_id().clone());
    ctx.flush_notifications();
    let variant_id = result?;

    if ctx.output.is_json() {
        ctx.output.json(&ctx.shop.cart().find(&variant_id));
    } else {
        ctx.output.debug(&format!(
            "cart holds {} item(s)",
            ctx.shop.cart().total_items()
        ));
    }
    Ok(())
}

fn update(variant: &str, quantity: i64, ctx: &mut Context) -> Result<()> {
    let variant_id = VariantId::new(variant);
    if !ctx.shop.cart_mut().update_quantity(&variant_id, quantity) {
        bail!("No cart line for variant {}", variant);
    }

    if quantity > 0 {
        ctx.output
            .success(&format!("Set {} to {}", variant, quantity));
    }
    if ctx.output.is_json() {
        ctx.output.cart(ctx.shop.cart());
    }
    Ok(())
}

fn remove(variant: &str, ctx: &mut Context) -> Result<()> {
    if ctx
        .shop
        .cart_mut()
        .remove_item(&VariantId::new(variant))
        .is_none()
    {
        ctx.output
            .info(&format!("{} was not in the cart", variant));
    }
    if ctx.output.is_json() {
        ctx.output.cart(ctx.shop.cart());
    }
    Ok(())
}

fn clear(yes: bool, ctx: &mut Context) -> Result<()> {
    if !yes && !ctx.output.is_json() && !ctx.shop.cart().is_empty() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} item(s) from the cart?",
                ctx.shop.cart().total_items()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cancelled.");
            return Ok(());
        }
    }

    ctx.shop.cart_mut().clear();
    if ctx.output.is_json() {
        ctx.output.cart(ctx.shop.cart());
    }
    Ok(())
}
