//! Session layer for the FitHaven storefront.
//!
//! Wraps the domain logic in `fithaven_commerce` with what a running shop
//! needs around it:
//!
//! - **Config**: `fithaven.toml` / `fithaven.json` discovery and validation
//! - **Logging**: `tracing-subscriber` setup
//! - **Pages**: Catalog, product detail, cart, and comparison page state
//! - **Carousel**: Hero slides with a cancellable auto-advance timer
//! - **Session**: A shopper's visit tying the pages to one cart

pub mod carousel;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod session;

pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use session::{Storefront, DEMO_CART};
