//! Read-only catalog data providers.
//!
//! The storefront logic depends on [`CatalogProvider`] rather than on the
//! fixture data directly, so a real catalog service can replace
//! [`FixtureCatalog`] without touching pricing, search, or reviews.

use std::collections::HashSet;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::reviews::Review;

/// Category value that matches every product.
pub const ALL_CATEGORIES: &str = "all";

const CATALOG_JSON: &str = include_str!("../../fixtures/catalog.json");
const REVIEWS_JSON: &str = include_str!("../../fixtures/reviews.json");

/// Source of catalog and review data.
pub trait CatalogProvider: Send + Sync {
    /// Every product, in catalog order.
    fn products(&self) -> &[Product];

    /// Reviews for a product, in display order.
    fn reviews_for(&self, product_id: ProductId) -> Vec<Review>;

    /// Look up a product by ID.
    fn product(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    /// Category filter values: "all" followed by distinct categories in
    /// first-seen order.
    fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(
                self.products()
                    .iter()
                    .filter(|p| seen.insert(p.category.as_str()))
                    .map(|p| p.category.clone()),
            )
            .collect()
    }
}

/// Catalog backed by the JSON fixtures embedded in the crate.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    products: Vec<Product>,
    reviews: Vec<Review>,
}

impl FixtureCatalog {
    /// Parse and validate the embedded fixtures.
    pub fn load() -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(CATALOG_JSON)?;
        let reviews: Vec<Review> = serde_json::from_str(REVIEWS_JSON)?;
        Self::from_parts(products, reviews)
    }

    /// Build a catalog from explicit data, checking every invariant.
    pub fn from_parts(products: Vec<Product>, reviews: Vec<Review>) -> Result<Self, CommerceError> {
        let mut ids = HashSet::new();
        for product in &products {
            product.validate()?;
            if !ids.insert(product.id) {
                return Err(CommerceError::InvalidProduct(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        for review in &reviews {
            review.validate()?;
        }

        tracing::debug!(
            products = products.len(),
            reviews = reviews.len(),
            "catalog fixtures loaded"
        );

        Ok(Self { products, reviews })
    }
}

impl CatalogProvider for FixtureCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn reviews_for(&self, product_id: ProductId) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect()
    }
}
