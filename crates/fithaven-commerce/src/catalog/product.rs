//! Product types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest star rating a product or review can carry.
pub const MAX_RATING: u8 = 5;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current selling price.
    pub price: Money,
    /// Price before discount, shown struck through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Primary image URL.
    pub image: String,
    /// Star rating, 0-5.
    pub rating: u8,
    /// Category name (e.g., "Cardio").
    pub category: String,
    /// Marketing description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Feature bullet points, in display order.
    #[serde(default)]
    pub features: Vec<String>,
    /// Technical specifications, in display order.
    #[serde(default)]
    pub specifications: Vec<Specification>,
    /// Additional gallery images.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Create a product with the required fields.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            original_price: None,
            image: String::new(),
            rating: 0,
            category: category.into(),
            description: None,
            features: Vec::new(),
            specifications: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn with_specification(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.push(Specification::new(name, value));
        self
    }

    /// Check the product invariants.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.price.is_negative() {
            return Err(CommerceError::InvalidProduct(format!(
                "{}: negative price",
                self.id
            )));
        }
        if self.rating > MAX_RATING {
            return Err(CommerceError::InvalidProduct(format!(
                "{}: rating {} out of range",
                self.id, self.rating
            )));
        }
        if let Some(original) = self.original_price {
            if original.currency != self.price.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.price.currency.code().to_string(),
                    got: original.currency.code().to_string(),
                });
            }
            if original.amount_cents < self.price.amount_cents {
                return Err(CommerceError::InvalidProduct(format!(
                    "{}: original price below selling price",
                    self.id
                )));
            }
        }
        Ok(())
    }

    /// Check if the product is discounted.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Discount off the original price, rounded to a whole percent.
    ///
    /// Zero when there is no original price.
    pub fn discount_percent(&self) -> u8 {
        match self.original_price {
            Some(op) if op.amount_cents > 0 && op.amount_cents > self.price.amount_cents => {
                let savings = (op.amount_cents - self.price.amount_cents) as f64;
                ((savings / op.amount_cents as f64) * 100.0).round() as u8
            }
            _ => 0,
        }
    }

    /// Amount saved against the original price.
    pub fn savings(&self) -> Option<Money> {
        self.original_price
            .filter(|_| self.is_on_sale())
            .and_then(|op| op.try_subtract(&self.price))
    }

    /// Look up a specification value by name.
    pub fn specification(&self, name: &str) -> Option<&str> {
        self.specifications
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value.as_str())
    }
}

/// A named technical specification (e.g., Weight: 285 lbs).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Specification {
    /// Specification name (e.g., "Weight").
    pub name: String,
    /// Specification value (e.g., "285 lbs").
    pub value: String,
}

impl Specification {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Render a rating as five filled/empty stars.
pub fn render_stars(filled: u8) -> String {
    let filled = filled.min(MAX_RATING) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled)
    )
}
