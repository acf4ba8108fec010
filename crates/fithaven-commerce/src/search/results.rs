//! Catalog query results.

use crate::catalog::Product;
use crate::ids::ProductId;

/// Message shown when no product passes the filters.
pub const NO_RESULTS_MESSAGE: &str = "No products found";

/// Products visible after a catalog query, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResults<'a> {
    /// The visible products.
    pub items: Vec<&'a Product>,
    /// Size of the catalog the query ran against.
    pub total: usize,
}

impl<'a> QueryResults<'a> {
    /// Create new query results.
    pub fn new(items: Vec<&'a Product>, total: usize) -> Self {
        Self { items, total }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of visible products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// IDs of the visible products, in display order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id).collect()
    }

    /// Summary line for the results header (e.g., "Showing 3 of 8 products").
    pub fn summary(&self) -> String {
        if self.is_empty() {
            NO_RESULTS_MESSAGE.to_string()
        } else {
            format!("Showing {} of {} products", self.len(), self.total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    #[test]
    fn test_results_summary() {
        let product = Product::new(
            ProductId::new(7),
            "Kettlebell Set",
            Money::from_units(199, Currency::USD),
            "Free Weights",
        );
        let results = QueryResults::new(vec![&product], 8);
        assert_eq!(results.summary(), "Showing 1 of 8 products");
        assert_eq!(results.ids(), vec![ProductId::new(7)]);

        let empty = QueryResults::new(Vec::new(), 8);
        assert!(empty.is_empty());
        assert_eq!(empty.summary(), NO_RESULTS_MESSAGE);
    }
}
