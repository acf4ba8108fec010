//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod compare;
pub mod config;
pub mod product;
pub mod reviews;

use clap::{Args, Subcommand};
use fithaven_commerce::search::SortOption;
use fithaven_commerce::ProductId;

pub use cart::CartEntry;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Case-insensitive name search
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category to show ("all" for every category)
    #[arg(short = 'C', long, default_value = "all")]
    pub category: String,

    /// Sort order: name, price-low, price-high, rating
    #[arg(long, default_value = "name")]
    pub sort: SortOption,

    /// List the available categories instead of products
    #[arg(long)]
    pub categories: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID
    pub id: ProductId,

    /// Quantity to add to a cart preview
    #[arg(short, long)]
    pub quantity: Option<i64>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Line to add, as ID or ID:QTY (repeatable); without any, the demo
    /// cart is priced
    #[arg(short = 'a', long = "add", value_name = "ID[:QTY]")]
    pub items: Vec<CartEntry>,

    /// Line to remove after adding (repeatable)
    #[arg(short, long = "remove", value_name = "ID")]
    pub remove: Vec<ProductId>,
}

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    /// Products to compare (defaults to the first two)
    pub ids: Vec<ProductId>,
}

/// Arguments for the reviews command.
#[derive(Args)]
pub struct ReviewsArgs {
    /// Product whose reviews to show
    #[arg(default_value = "1")]
    pub product: ProductId,

    /// Write a review with this star rating
    #[arg(short, long)]
    pub rating: Option<u8>,

    /// Reviewer name
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Review title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Review text
    #[arg(short, long, default_value = "")]
    pub body: String,

    /// Mark a review as helpful
    #[arg(long, value_name = "REVIEW_ID")]
    pub helpful: Option<u32>,
}

/// Arguments for the chat command.
#[derive(Args)]
pub struct ChatArgs {
    /// Topics to ask about without prompting (repeatable)
    #[arg(short = 'a', long = "ask", value_name = "TOPIC")]
    pub topics: Vec<String>,

    /// Hand off to support with this email after asking
    #[arg(long)]
    pub email: Option<String>,

    /// Message for the support team
    #[arg(short, long, default_value = "")]
    pub message: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Initialize a new fithaven.toml
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration
    Validate,
}
