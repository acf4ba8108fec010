//! FitHaven CLI - browse the fitness equipment storefront from a terminal.
//!
//! Commands:
//! - `fithaven catalog` - List and filter products
//! - `fithaven product` - Show a product's details and reviews
//! - `fithaven cart` - Price a cart
//! - `fithaven compare` - Compare products side by side
//! - `fithaven reviews` - Read or write product reviews
//! - `fithaven chat` - Talk to the support assistant
//! - `fithaven config` - Manage configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CatalogArgs, ChatArgs, CompareArgs, ConfigArgs, ProductArgs, ReviewsArgs};

/// FitHaven CLI - Browse, compare and price gym equipment
#[derive(Parser)]
#[command(name = "fithaven")]
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
    /// List products, optionally filtered and sorted
    Catalog(CatalogArgs),

    /// Show one product's details
    Product(ProductArgs),

    /// Build and price a cart
    Cart(CartArgs),

    /// Compare up to four products
    Compare(CompareArgs),

    /// Read or write reviews for a product
    Reviews(ReviewsArgs),

    /// Chat with the support assistant
    Chat(ChatArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let level_override = cli.verbose.then_some("debug");
    if let Err(e) = fithaven_storefront::logging::init(&ctx.config.logging, level_override) {
        ctx.output.warn(&e.to_string());
    }
    if let Some(path) = &ctx.config_path {
        tracing::debug!(path = %path.display(), "using config file");
    }

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Compare(args) => commands::compare::run(args, &ctx).await,
        Commands::Reviews(args) => commands::reviews::run(args, &ctx).await,
        Commands::Chat(args) => commands::chat::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
