//! Checkout command.

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use gaming_commerce::prelude::OrderReceipt;

use crate::context::Context;

/// Run the checkout command.
pub fn run(ctx: &mut Context) -> Result<()> {
    let receipt = ctx.shop.checkout()?;

    if ctx.output.is_json() {
        ctx.output.json(&receipt);
        return Ok(());
    }

    ctx.output.success("Order placed");
    print_receipt(&receipt, ctx);
    Ok(())
}

fn print_receipt(receipt: &OrderReceipt, ctx: &Context) {
    ctx.output.header(&format!("Order {}", receipt.id));
    ctx.output.kv("Placed", &format_timestamp(receipt.placed_at));
    ctx.output.kv("Status", receipt.status.as_str());
    for item in &receipt.items {
        ctx.output.list_item(&format!(
            "{} × {} ({}) {}",
            item.quantity,
            item.product.name,
            item.variant.label(),
            item.line_total().display()
        ));
    }
    ctx.output.kv("Items", &receipt.total_items.to_string());
    ctx.output.kv("Total", &receipt.total.display());
}

fn format_timestamp(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
        assert_eq!(format_timestamp(0).len(), "1970-01-01 00:00".len());
    }
}
