//! CLI command implementations.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod users;

use clap::{Args, Subcommand};
use gaming_commerce::prelude::SortOption;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show this category.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort order (featured, price-low-high, price-high-low, name-a-z, name-z-a).
    #[arg(short, long, default_value = "featured", value_parser = parse_sort)]
    pub sort: SortOption,

    /// Only show featured products.
    #[arg(long)]
    pub featured: bool,
}

fn parse_sort(value: &str) -> Result<SortOption, String> {
    value.parse().map_err(|e: gaming_commerce::CommerceError| e.to_string())
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product slug.
    pub slug: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product.
    Add {
        /// Product slug.
        slug: String,

        /// Variant color (default: first listed).
        #[arg(long)]
        color: Option<String>,

        /// Variant size (default: first listed).
        #[arg(long)]
        size: Option<String>,

        /// Units to add.
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Set the quantity of a line (0 removes it).
    Update {
        /// Variant ID.
        variant: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a line.
    Remove {
        /// Variant ID.
        variant: String,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Display name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Email address.
    #[arg(short, long)]
    pub email: Option<String>,

    /// Password (prompted when omitted).
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address.
    pub email: String,

    /// Password (prompted when omitted).
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the users command.
#[derive(Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: Option<UsersCommand>,
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List registered accounts.
    List,
    /// Change an account's role.
    SetRole {
        /// Account email.
        email: String,
        /// New role (customer, admin, rider).
        role: String,
    },
}
