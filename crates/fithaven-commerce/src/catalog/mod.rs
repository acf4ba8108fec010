//! Product catalog module.
//!
//! Contains the product type and the read-only data providers.

mod product;
mod provider;

pub use product::{render_stars, Product, Specification, MAX_RATING};
pub use provider::{CatalogProvider, FixtureCatalog, ALL_CATEGORIES};
