//! Cart and line item types.

use crate::cart::{CartPricing, PricingPolicy};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::notice::Notice;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A shopping cart.
///
/// Lines are unique by product and always hold a quantity of at least one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart, in the order they were added.
    pub items: Vec<LineItem>,
}

/// What the cart page renders.
#[derive(Debug, Clone, PartialEq)]
pub enum CartSummary {
    /// No lines; the page shows "Your cart is empty".
    Empty,
    /// At least one line, with its pricing.
    Priced(CartPricing),
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        matches!(self, CartSummary::Empty)
    }

    /// Pricing, if the cart has lines.
    pub fn pricing(&self) -> Option<&CartPricing> {
        match self {
            CartSummary::Empty => None,
            CartSummary::Priced(pricing) => Some(pricing),
        }
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// Adding a product that is already in the cart increases its quantity.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - Adding would exceed MAX_QUANTITY_PER_ITEM
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<Notice, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
        } else {
            if quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            self.items.push(LineItem::from_product(product, quantity));
        }

        tracing::info!(product_id = %product.id, quantity, "added to cart");
        Ok(Notice::success(format!("{} added to cart!", product.name)))
    }

    /// Set a line's quantity.
    ///
    /// A quantity of 0 removes the line. Negative quantities are rejected.
    /// Returns `Ok(None)` when the quantity changed and `Ok(Some(notice))`
    /// when the line was removed.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<Option<Notice>, CommerceError> {
        if quantity < 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if quantity == 0 {
            return self.remove_item(product_id).map(Some);
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or(CommerceError::ItemNotInCart(product_id))?;
        item.quantity = quantity;
        tracing::debug!(%product_id, quantity, "cart quantity updated");
        Ok(None)
    }

    /// Increase a line's quantity by one.
    pub fn increment(&mut self, product_id: ProductId) -> Result<Option<Notice>, CommerceError> {
        let current = self.quantity_of(product_id)?;
        self.update_quantity(product_id, current + 1)
    }

    /// Decrease a line's quantity by one; a line at 1 is removed.
    pub fn decrement(&mut self, product_id: ProductId) -> Result<Option<Notice>, CommerceError> {
        let current = self.quantity_of(product_id)?;
        self.update_quantity(product_id, current - 1)
    }

    /// Remove a line from the cart.
    pub fn remove_item(&mut self, product_id: ProductId) -> Result<Notice, CommerceError> {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        if self.items.len() == len_before {
            return Err(CommerceError::ItemNotInCart(product_id));
        }
        tracing::info!(%product_id, remaining = self.items.len(), "removed from cart");
        Ok(Notice::success("Item removed from cart"))
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) -> Notice {
        self.items.clear();
        tracing::info!("cart cleared");
        Notice::success("Cart cleared")
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by product.
    pub fn get_item(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Calculate cart pricing; empty carts price to zero.
    pub fn calculate_pricing(&self, policy: &PricingPolicy) -> Result<CartPricing, CommerceError> {
        policy.price(&self.items)
    }

    /// Summarize the cart for display.
    pub fn summary(&self, policy: &PricingPolicy) -> Result<CartSummary, CommerceError> {
        if self.is_empty() {
            return Ok(CartSummary::Empty);
        }
        self.calculate_pricing(policy).map(CartSummary::Priced)
    }

    fn quantity_of(&self, product_id: ProductId) -> Result<i64, CommerceError> {
        self.get_item(product_id)
            .map(|i| i.quantity)
            .ok_or(CommerceError::ItemNotInCart(product_id))
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Product category (denormalized for display).
    pub category: String,
    /// Product image URL.
    pub image: String,
    /// Unit price at the time the product was added.
    pub unit_price: Money,
    /// Quantity, at least one.
    pub quantity: i64,
}

impl LineItem {
    /// Create a line from a catalog product.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    /// unit_price * quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}
