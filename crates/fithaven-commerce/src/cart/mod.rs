//! Shopping cart module.
//!
//! Contains types for the cart, its line items, and pricing.

mod cart;
mod pricing;

pub use cart::{Cart, CartSummary, LineItem, MAX_QUANTITY_PER_ITEM};
pub use pricing::{
    CartPricing, LineItemPricing, PricingPolicy, DEFAULT_FLAT_SHIPPING_FEE,
    DEFAULT_FREE_SHIPPING_THRESHOLD, DEFAULT_TAX_RATE,
};
