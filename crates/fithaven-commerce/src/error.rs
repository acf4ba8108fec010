//! Commerce error types.

use thiserror::Error;

use crate::ids::{ProductId, ReviewId};

/// Errors that can occur in storefront operations.
///
/// Every variant is a recoverable, user-correctable rejection. Callers
/// surface the message and keep their state unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Comparison list already holds the maximum number of products.
    #[error("You can only compare up to {0} products")]
    ComparisonFull(usize),

    /// Product is already being compared.
    #[error("Product is already in comparison list")]
    AlreadyInComparison(ProductId),

    /// Review form submitted with missing fields.
    #[error("Please fill in all fields")]
    IncompleteReview { missing: Vec<&'static str> },

    /// Rating outside the 1-5 range.
    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(u8),

    /// Review not found.
    #[error("Review not found: {0}")]
    ReviewNotFound(ReviewId),

    /// Contact form submitted with missing required fields.
    #[error("Please fill in all required fields")]
    IncompleteContactForm { missing: Vec<&'static str> },

    /// Email address failed validation.
    #[error("Please enter a valid email address")]
    InvalidEmail(String),

    /// Fixture or product data violates an invariant.
    #[error("Invalid product data: {0}")]
    InvalidProduct(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
