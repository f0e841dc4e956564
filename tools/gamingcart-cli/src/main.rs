//! GamingCart CLI - browse the catalog and manage a cart from the terminal.
//!
//! Commands:
//! - `gamingcart products` - List products
//! - `gamingcart product` - Show one product and its options
//! - `gamingcart cart` - Show and change the cart
//! - `gamingcart register` / `login` / `logout` / `whoami` - Accounts
//! - `gamingcart checkout` - Place an order
//! - `gamingcart users` - Administer accounts

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{CartArgs, LoginArgs, ProductArgs, ProductsArgs, RegisterArgs, UsersArgs};
use config::{LogFormat, LoggingConfig};

/// GamingCart - a console and accessory store
#[derive(Parser)]
#[command(name = "gamingcart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// Show a product
    Product(ProductArgs),

    /// Show or change the cart
    Cart(CartArgs),

    /// Create an account and sign in
    Register(RegisterArgs),

    /// Sign in
    Login(LoginArgs),

    /// Sign out
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Place an order for the cart
    Checkout,

    /// Manage accounts (admins only)
    Users(UsersArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let (config, cwd) = match context::Context::load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    init_logging(&config.logging, cli.verbose);

    let mut ctx = match context::Context::open(config, &cwd, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Products(args) => commands::catalog::list(args, &ctx),
        Commands::Product(args) => commands::catalog::show(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &mut ctx),
        Commands::Register(args) => commands::account::register(args, &ctx),
        Commands::Login(args) => commands::account::login(args, &ctx),
        Commands::Logout => commands::account::logout(&ctx),
        Commands::Whoami => commands::account::whoami(&ctx),
        Commands::Checkout => commands::checkout::run(&mut ctx),
        Commands::Users(args) => commands::users::run(args, &ctx),
    };

    ctx.finish();

    if let Err(e) = result {
        tracing::debug!(error = %format!("{:#}", e), "command failed");
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the global subscriber. Logs go to stderr so `--json` output
/// on stdout stays parseable.
fn init_logging(config: &LoggingConfig, verbose: bool) {
    let default_level = if verbose { "debug" } else { config.level.as_str() };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
