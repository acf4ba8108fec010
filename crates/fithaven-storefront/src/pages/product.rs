//! Product detail page.

use chrono::Local;
use fithaven_commerce::cart::Cart;
use fithaven_commerce::catalog::{CatalogProvider, Product};
use fithaven_commerce::reviews::ReviewBoard;
use fithaven_commerce::wishlist::Wishlist;
use fithaven_commerce::{CommerceError, Money, Notice, ProductId};

/// Quantity picker next to "Add to Cart". Never goes below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    value: i64,
}

impl Default for QuantitySelector {
    fn default() -> Self {
        Self { value: 1 }
    }
}

impl QuantitySelector {
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) -> i64 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    /// Decrease by one, clamped at 1.
    pub fn decrement(&mut self) -> i64 {
        self.value = (self.value - 1).max(1);
        self.value
    }

    /// Set a typed value, clamped at 1.
    pub fn set(&mut self, value: i64) -> i64 {
        self.value = value.max(1);
        self.value
    }
}

/// State behind a product's detail page.
#[derive(Debug, Clone)]
pub struct ProductPage {
    product: Product,
    pub quantity: QuantitySelector,
    wishlist: Wishlist,
    selected_image: usize,
    reviews: ReviewBoard,
}

impl ProductPage {
    /// Open the page for a product, loading its reviews.
    pub fn open(catalog: &dyn CatalogProvider, id: ProductId) -> Result<Self, CommerceError> {
        let product = catalog
            .product(id)
            .cloned()
            .ok_or(CommerceError::ProductNotFound(id))?;
        let reviews = ReviewBoard::new(id, catalog.reviews_for(id));
        tracing::debug!(product_id = %id, reviews = reviews.reviews().len(), "product page opened");

        Ok(Self {
            product,
            quantity: QuantitySelector::default(),
            wishlist: Wishlist::new(),
            selected_image: 0,
            reviews,
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Gallery images; the card image when the product has no gallery.
    pub fn images(&self) -> Vec<&str> {
        if self.product.images.is_empty() {
            vec![self.product.image.as_str()]
        } else {
            self.product.images.iter().map(String::as_str).collect()
        }
    }

    pub fn selected_image(&self) -> usize {
        self.selected_image
    }

    /// Pick a gallery thumbnail. Out-of-range indexes are ignored.
    pub fn select_image(&mut self, index: usize) -> bool {
        if index < self.images().len() {
            self.selected_image = index;
            true
        } else {
            false
        }
    }

    pub fn discount_percent(&self) -> u8 {
        self.product.discount_percent()
    }

    pub fn savings(&self) -> Option<Money> {
        self.product.savings()
    }

    /// Add the selected quantity to the cart.
    pub fn add_to_cart(&self, cart: &mut Cart) -> Result<Notice, CommerceError> {
        let quantity = self.quantity.value();
        cart.add_item(&self.product, quantity)?;
        Ok(Notice::success(format!(
            "{} x {} added to cart!",
            quantity, self.product.name
        )))
    }

    pub fn is_liked(&self) -> bool {
        self.wishlist.is_liked(self.product.id)
    }

    pub fn toggle_like(&mut self) -> Notice {
        self.wishlist.toggle(self.product.id).1
    }

    pub fn reviews(&self) -> &ReviewBoard {
        &self.reviews
    }

    pub fn reviews_mut(&mut self) -> &mut ReviewBoard {
        &mut self.reviews
    }

    /// Submit the review form, dated today.
    pub fn submit_review(&mut self) -> Result<Notice, CommerceError> {
        self.reviews.submit(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fithaven_commerce::catalog::FixtureCatalog;

    fn rack_page() -> ProductPage {
        let catalog = FixtureCatalog::load().unwrap();
        ProductPage::open(&catalog, ProductId::new(1)).unwrap()
    }

    #[test]
    fn test_quantity_clamps_at_one() {
        let mut quantity = QuantitySelector::default();
        assert_eq!(quantity.decrement(), 1);
        assert_eq!(quantity.increment(), 2);
        assert_eq!(quantity.decrement(), 1);
        assert_eq!(quantity.set(-4), 1);
        assert_eq!(quantity.set(3), 3);
    }

    #[test]
    fn test_open_missing_product() {
        let catalog = FixtureCatalog::load().unwrap();
        assert!(matches!(
            ProductPage::open(&catalog, ProductId::new(99)),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_add_selected_quantity() {
        let mut page = rack_page();
        page.quantity.set(2);
        let mut cart = Cart::new();

        let notice = page.add_to_cart(&mut cart).unwrap();
        assert_eq!(notice.message, "2 x Professional Power Rack added to cart!");
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_sale_and_gallery() {
        let mut page = rack_page();
        assert_eq!(page.discount_percent(), 31);
        assert_eq!(page.savings().unwrap().display(), "$400.00");
        assert_eq!(page.images().len(), 4);
        assert!(page.select_image(3));
        assert!(!page.select_image(4));
        assert_eq!(page.selected_image(), 3);
    }

    #[test]
    fn test_like_and_reviews() {
        let mut page = rack_page();
        assert_eq!(page.toggle_like().message, "Added to wishlist");
        assert!(page.is_liked());
        assert_eq!(page.reviews().summary().total_reviews, 3);

        let err = page.submit_review().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields");
    }
}
