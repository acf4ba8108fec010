//! Storefront domain types and logic for FitHaven.
//!
//! This crate holds the deterministic core of the fitness equipment store:
//!
//! - **Catalog**: Products and the fixture-backed catalog provider
//! - **Search**: Text and category filters, sort keys, query results
//! - **Cart**: Shopping cart with line items and pricing policy
//! - **Reviews**: Review records, rating aggregate, review form
//! - **Assistant**: Scripted support chat with e-mail hand-off
//! - **Compare / Wishlist / Contact**: Comparison table, liked flags, contact form
//!
//! # Example
//!
//! ```rust
//! use fithaven_commerce::prelude::*;
//!
//! let catalog = FixtureCatalog::load().unwrap();
//! let rack = catalog.product(ProductId::new(1)).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item(rack, 1).unwrap();
//!
//! let pricing = cart.calculate_pricing(&PricingPolicy::default()).unwrap();
//! println!("Total: {}", pricing.total.display());
//! ```

pub mod email;
pub mod error;
pub mod ids;
pub mod money;
pub mod notice;

pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod compare;
pub mod contact;
pub mod reviews;
pub mod search;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use notice::{Notice, NoticeLevel};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::notice::{Notice, NoticeLevel};

    // Catalog
    pub use crate::catalog::{CatalogProvider, FixtureCatalog, Product, Specification};

    // Cart
    pub use crate::cart::{Cart, CartPricing, CartSummary, LineItem, PricingPolicy};

    // Search
    pub use crate::search::{CatalogQuery, CategoryFilter, QueryResults, SortOption};

    // Reviews
    pub use crate::reviews::{Review, ReviewBoard, ReviewDraft, ReviewSummary};

    // Assistant
    pub use crate::assistant::{
        AssistantError, AssistantPhase, CannedAnswers, ChatMessage, ChatOption,
        ScriptedAssistant, SupportHandoff,
    };

    pub use crate::compare::{ComparisonRow, ComparisonSet};
    pub use crate::contact::{ContactForm, ContactRequest};
    pub use crate::wishlist::Wishlist;
}
