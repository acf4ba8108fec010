//! Catalog filter predicates.

use crate::catalog::{Product, ALL_CATEGORIES};
use serde::{Deserialize, Serialize};

/// Category selection for the catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Exactly one named category.
    Named(String),
}

impl CategoryFilter {
    /// Parse a category value; "all" selects every category.
    pub fn parse(value: impl Into<String>) -> Self {
        let value = value.into();
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Check whether a product belongs to the selected category.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category == *name,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::parse(value)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// Case-insensitive substring match on the product name.
///
/// The search term is expected to be lowercased already; an empty term
/// matches every product.
pub fn name_contains(product: &Product, lowered_term: &str) -> bool {
    lowered_term.is_empty() || product.name.to_lowercase().contains(lowered_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn bike() -> Product {
        Product::new(
            ProductId::new(6),
            "Exercise Bike Pro",
            Money::from_units(799, Currency::USD),
            "Cardio",
        )
    }

    #[test]
    fn test_category_filter() {
        assert!(CategoryFilter::All.matches(&bike()));
        assert!(CategoryFilter::parse("Cardio").matches(&bike()));
        assert!(!CategoryFilter::parse("Free Weights").matches(&bike()));
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        assert!(name_contains(&bike(), "bike"));
        assert!(name_contains(&bike(), ""));
        assert!(!name_contains(&bike(), "rack"));
    }

    #[test]
    fn test_category_serializes_as_string() {
        let json = serde_json::to_string(&CategoryFilter::All).unwrap();
        assert_eq!(json, "\"all\"");
        let parsed: CategoryFilter = serde_json::from_str("\"Cardio\"").unwrap();
        assert_eq!(parsed, CategoryFilter::Named("Cardio".to_string()));
    }
}
