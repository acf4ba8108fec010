//! Side-by-side product comparison.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::notice::Notice;
use serde::{Deserialize, Serialize};

/// Maximum number of products compared at once.
pub const MAX_COMPARED_PRODUCTS: usize = 4;

/// Number of features shown per product in the comparison table.
pub const COMPARED_FEATURES: usize = 3;

/// An ordered set of up to four products, unique by ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ComparisonSet {
    products: Vec<Product>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product.
    ///
    /// Rejected without mutation when the set is full or already holds the
    /// product.
    pub fn add(&mut self, product: &Product) -> Result<Notice, CommerceError> {
        if self.products.len() >= MAX_COMPARED_PRODUCTS {
            tracing::warn!(product_id = %product.id, "comparison list full");
            return Err(CommerceError::ComparisonFull(MAX_COMPARED_PRODUCTS));
        }
        if self.contains(product.id) {
            tracing::warn!(product_id = %product.id, "product already compared");
            return Err(CommerceError::AlreadyInComparison(product.id));
        }

        self.products.push(product.clone());
        Ok(Notice::success(format!(
            "{} added to comparison list",
            product.name
        )))
    }

    /// Remove a product by ID.
    pub fn remove(&mut self, product_id: ProductId) -> Option<Notice> {
        let len_before = self.products.len();
        self.products.retain(|p| p.id != product_id);
        (self.products.len() < len_before)
            .then(|| Notice::success("Product removed from comparison"))
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == product_id)
    }

    pub fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Products in the order they were added.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.products.len() >= MAX_COMPARED_PRODUCTS
    }

    /// Specification names across all compared products, first-seen order.
    pub fn specification_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for spec in self.products.iter().flat_map(|p| &p.specifications) {
            if !names.contains(&spec.name.as_str()) {
                names.push(&spec.name);
            }
        }
        names
    }

    /// Build the comparison table rows.
    pub fn rows(&self) -> Vec<ComparisonRow> {
        let mut rows = vec![
            ComparisonRow::new(
                "Price",
                self.products.iter().map(|p| Some(p.price.display())),
            ),
            ComparisonRow::new(
                "Rating",
                self.products
                    .iter()
                    .map(|p| Some(crate::catalog::render_stars(p.rating))),
            ),
            ComparisonRow::new(
                "Category",
                self.products.iter().map(|p| Some(p.category.clone())),
            ),
            ComparisonRow::new(
                "Key Features",
                self.products.iter().map(|p| {
                    (!p.features.is_empty()).then(|| {
                        p.features
                            .iter()
                            .take(COMPARED_FEATURES)
                            .cloned()
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                }),
            ),
        ];

        for name in self.specification_names() {
            rows.push(ComparisonRow::new(
                name,
                self.products
                    .iter()
                    .map(|p| p.specification(name).map(str::to_string)),
            ));
        }
        rows
    }
}

/// One attribute compared across every product in the set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonRow {
    /// Attribute label.
    pub label: String,
    /// One cell per compared product; `None` when the product lacks it.
    pub values: Vec<Option<String>>,
}

impl ComparisonRow {
    fn new(label: impl Into<String>, values: impl Iterator<Item = Option<String>>) -> Self {
        Self {
            label: label.into(),
            values: values.collect(),
        }
    }
}
