//! Shopping cart page.

use fithaven_commerce::cart::{Cart, CartPricing, CartSummary, LineItem, PricingPolicy};
use fithaven_commerce::{CommerceError, Money, Notice, ProductId};

/// Heading shown instead of the order summary when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// The cart page, borrowing the session's cart.
pub struct CartPage<'a> {
    cart: &'a mut Cart,
    policy: &'a PricingPolicy,
}

impl<'a> CartPage<'a> {
    pub fn new(cart: &'a mut Cart, policy: &'a PricingPolicy) -> Self {
        Self { cart, policy }
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.cart.items
    }

    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        self.cart.summary(self.policy)
    }

    /// "Add $X more for free shipping!" while shipping is charged.
    pub fn free_shipping_hint(&self, pricing: &CartPricing) -> Option<String> {
        if pricing.has_free_shipping() {
            return None;
        }
        let remaining = self
            .policy
            .free_shipping_threshold
            .try_subtract(&pricing.subtotal)
            .filter(|m| !m.is_negative())
            .unwrap_or_else(|| Money::zero(pricing.subtotal.currency));
        Some(format!("Add {} more for free shipping!", remaining.display()))
    }

    pub fn increment(&mut self, id: ProductId) -> Result<Option<Notice>, CommerceError> {
        self.cart.increment(id)
    }

    /// The minus button; removes the line at quantity 1.
    pub fn decrement(&mut self, id: ProductId) -> Result<Option<Notice>, CommerceError> {
        self.cart.decrement(id)
    }

    pub fn update_quantity(
        &mut self,
        id: ProductId,
        quantity: i64,
    ) -> Result<Option<Notice>, CommerceError> {
        self.cart.update_quantity(id, quantity)
    }

    pub fn remove(&mut self, id: ProductId) -> Result<Notice, CommerceError> {
        self.cart.remove_item(id)
    }

    pub fn clear(&mut self) -> Notice {
        self.cart.clear()
    }
}
