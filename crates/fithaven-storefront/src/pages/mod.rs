//! Per-page state.
//!
//! Each page owns what it shows; the session's cart is lent by `&mut` to
//! any page that can add to it.

mod cart;
mod catalog;
mod compare;
mod product;

pub use cart::{CartPage, EMPTY_CART_MESSAGE};
pub use catalog::CatalogPage;
pub use compare::{ComparisonPage, DEFAULT_COMPARED, NO_COMPARISON_MESSAGE};
pub use product::{ProductPage, QuantitySelector};
