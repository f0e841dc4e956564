//! Output formatting for the CLI.

use console::style;
use gaming_commerce::prelude::{CartEngine, Notification, Severity, StockStatus};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a cart notification with a marker for its severity.
    pub fn notification(&self, note: &Notification) {
        match note.severity {
            Severity::Success => self.success(&note.message),
            Severity::Info => self.info(&note.message),
            Severity::Error => self.warn(&note.message),
        }
    }

    /// Print the cart lines and totals.
    pub fn cart(&self, cart: &CartEngine) {
        if self.json {
            self.json(&serde_json::json!({
                "items": cart.items(),
                "totalItems": cart.total_items(),
                "totalPrice": cart.total_price(),
            }));
            return;
        }

        self.header("Shopping Cart");
        if cart.is_empty() {
            self.info("Your cart is empty.");
            return;
        }

        let widths = [6, 32, 28, 4, 11];
        self.table_row(&["ID", "PRODUCT", "OPTIONS", "QTY", "SUBTOTAL"], &widths);
        for item in cart.items() {
            let quantity = item.quantity.to_string();
            let subtotal = item.line_total().display();
            self.table_row(
                &[
                    item.variant_id().as_str(),
                    &item.product.name,
                    &item.variant.label(),
                    &quantity,
                    &subtotal,
                ],
                &widths,
            );
        }
        println!();
        self.kv("Items", &cart.total_items().to_string());
        self.kv("Total", &style(cart.total_price().display()).bold().to_string());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Stock badge for a variant.
pub fn stock_badge(status: StockStatus) -> String {
    match status {
        StockStatus::InStock => style("In stock").green().to_string(),
        StockStatus::LowStock(n) => style(format!("Only {n} left")).yellow().to_string(),
        StockStatus::OutOfStock => style("Out of stock").red().to_string(),
    }
}
