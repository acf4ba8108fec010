//! Catalog query: filter and sort the catalog for display.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;
use crate::search::filter::{name_contains, CategoryFilter};
use crate::search::QueryResults;
use serde::{Deserialize, Serialize};

/// Sort options for the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Sort by name A-Z.
    #[default]
    #[serde(rename = "name")]
    Name,
    /// Sort by price, low to high.
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    /// Sort by price, high to low.
    #[serde(rename = "price-high")]
    PriceHighToLow,
    /// Sort by highest rated.
    #[serde(rename = "rating")]
    Rating,
}

impl SortOption {
    /// All sort options, in menu order.
    pub const ALL: [SortOption; 4] = [
        SortOption::Name,
        SortOption::PriceLowToHigh,
        SortOption::PriceHighToLow,
        SortOption::Rating,
    ];

    /// Key used in URLs, config, and the CLI.
    pub fn key(&self) -> &'static str {
        match self {
            SortOption::Name => "name",
            SortOption::PriceLowToHigh => "price-low",
            SortOption::PriceHighToLow => "price-high",
            SortOption::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Name => "Name",
            SortOption::PriceLowToHigh => "Price: Low to High",
            SortOption::PriceHighToLow => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
        }
    }

    /// Compare two products under this ordering.
    ///
    /// Equal products compare `Equal`; a stable sort keeps their catalog
    /// order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOption::PriceLowToHigh => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortOption::PriceHighToLow => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortOption::Rating => b.rating.cmp(&a.rating),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.key() == s)
            .ok_or_else(|| {
                format!(
                    "unknown sort key '{}' (expected one of: name, price-low, price-high, rating)",
                    s
                )
            })
    }
}

/// The inputs that determine which products are visible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    /// Free-text search on the product name.
    #[serde(default)]
    pub search_term: String,
    /// Category selection.
    #[serde(default)]
    pub category: CategoryFilter,
    /// Sort order.
    #[serde(default)]
    pub sort: SortOption,
}

impl CatalogQuery {
    /// Create a query that shows the whole catalog sorted by name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryFilter::parse(category);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Restore the search term and category to their defaults.
    ///
    /// The sort order is kept.
    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        self.category = CategoryFilter::All;
    }

    /// Check whether any filter narrows the catalog.
    pub fn has_filters(&self) -> bool {
        !self.search_term.is_empty() || self.category != CategoryFilter::All
    }

    /// Check whether a product passes both filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product) && name_contains(product, &self.search_term.to_lowercase())
    }

    /// Derive the visible products from a catalog.
    pub fn apply<'a>(&self, catalog: &'a [Product]) -> QueryResults<'a> {
        let term = self.search_term.to_lowercase();
        let mut items: Vec<&'a Product> = catalog
            .iter()
            .filter(|p| self.category.matches(p) && name_contains(p, &term))
            .collect();

        // `sort_by` is stable.
        items.sort_by(|a, b| self.sort.compare(a, b));

        tracing::debug!(
            search = %self.search_term,
            category = self.category.as_str(),
            sort = self.sort.key(),
            visible = items.len(),
            total = catalog.len(),
            "catalog query applied"
        );

        QueryResults::new(items, catalog.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, FixtureCatalog};
    use crate::ids::ProductId;

    fn catalog() -> Vec<Product> {
        FixtureCatalog::load().unwrap().products().to_vec()
    }

    fn ids(results: &QueryResults<'_>) -> Vec<u32> {
        results.items.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_default_query_sorts_by_name() {
        let catalog = catalog();
        let results = CatalogQuery::new().apply(&catalog);
        let names: Vec<&str> = results.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Adjustable Dumbbells",
                "Cable Machine System",
                "Commercial Treadmill",
                "Exercise Bike Pro",
                "Kettlebell Set",
                "Multi-Station Gym",
                "Olympic Barbell Set",
                "Professional Power Rack",
            ]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        let results = CatalogQuery::new().with_search("BELL").apply(&catalog);
        assert_eq!(ids(&results), vec![4, 7, 2]);
    }

    #[test]
    fn test_category_filter_and_price_sort() {
        let catalog = catalog();
        let results = CatalogQuery::new()
            .with_category("Cardio")
            .with_sort(SortOption::PriceLowToHigh)
            .apply(&catalog);
        assert_eq!(ids(&results), vec![6, 3]);

        let results = CatalogQuery::new()
            .with_category("Cardio")
            .with_sort(SortOption::PriceHighToLow)
            .apply(&catalog);
        assert_eq!(ids(&results), vec![3, 6]);
    }

    #[test]
    fn test_rating_sort_is_stable() {
        let catalog = catalog();
        let results = CatalogQuery::new()
            .with_sort(SortOption::Rating)
            .apply(&catalog);
        // Five-star products first, each group in catalog order.
        assert_eq!(ids(&results), vec![1, 3, 5, 7, 8, 2, 4, 6]);
    }

    #[test]
    fn test_visible_is_subset_satisfying_predicates() {
        let catalog = catalog();
        for term in ["", "pro", "set", "gym", "zzz"] {
            for category in ["all", "Cardio", "Strength Training", "Free Weights"] {
                let query = CatalogQuery::new().with_search(term).with_category(category);
                let results = query.apply(&catalog);
                for product in &results.items {
                    assert!(catalog.iter().any(|p| p.id == product.id));
                    assert!(query.matches(product));
                }
            }
        }
    }

    #[test]
    fn test_no_results_and_reset() {
        let catalog = catalog();
        let mut query = CatalogQuery::new()
            .with_search("rowing machine")
            .with_category("Cardio")
            .with_sort(SortOption::Rating);
        assert!(query.apply(&catalog).is_empty());
        assert!(query.has_filters());

        query.reset_filters();
        assert!(!query.has_filters());
        assert_eq!(query.sort, SortOption::Rating);
        assert_eq!(query.apply(&catalog).len(), 8);
    }

    #[test]
    fn test_empty_catalog() {
        let results = CatalogQuery::new().apply(&[]);
        assert!(results.is_empty());
        assert_eq!(results.total, 0);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("price-high".parse::<SortOption>(), Ok(SortOption::PriceHighToLow));
        assert!("newest".parse::<SortOption>().is_err());
        assert_eq!(SortOption::Rating.to_string(), "rating");
    }

    #[test]
    fn test_query_matches_single_product() {
        let catalog = catalog();
        let rack = catalog.iter().find(|p| p.id == ProductId::new(1)).unwrap();
        assert!(CatalogQuery::new().with_search("power").matches(rack));
        assert!(!CatalogQuery::new().with_category("Cardio").matches(rack));
    }
}
