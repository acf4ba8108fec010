//! Catalog search module.
//!
//! Contains the filter predicates, sort options, and query results used by
//! the catalog browser.

mod filter;
mod query;
mod results;

pub use filter::{name_contains, CategoryFilter};
pub use query::{CatalogQuery, SortOption};
pub use results::{QueryResults, NO_RESULTS_MESSAGE};
