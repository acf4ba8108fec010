//! Product comparison page.

use fithaven_commerce::cart::Cart;
use fithaven_commerce::catalog::CatalogProvider;
use fithaven_commerce::compare::{ComparisonRow, ComparisonSet};
use fithaven_commerce::{CommerceError, Notice, ProductId};

/// Heading shown when nothing is being compared.
pub const NO_COMPARISON_MESSAGE: &str = "No products to compare";

/// Products the comparison page opens with.
pub const DEFAULT_COMPARED: [ProductId; 2] = [ProductId::new(1), ProductId::new(2)];

/// The "Compare Products" page.
#[derive(Debug, Clone, Default)]
pub struct ComparisonPage {
    set: ComparisonSet,
}

impl ComparisonPage {
    /// Open the page with the given products.
    ///
    /// Unknown IDs are an error; duplicates and overflow are rejected the
    /// same way as adding from the catalog.
    pub fn open(catalog: &dyn CatalogProvider, ids: &[ProductId]) -> Result<Self, CommerceError> {
        let mut set = ComparisonSet::new();
        for id in ids {
            let product = catalog
                .product(*id)
                .ok_or(CommerceError::ProductNotFound(*id))?;
            set.add(product)?;
        }
        Ok(Self { set })
    }

    /// Open the page with its default pair.
    pub fn with_defaults(catalog: &dyn CatalogProvider) -> Result<Self, CommerceError> {
        Self::open(catalog, &DEFAULT_COMPARED)
    }

    pub fn set(&self) -> &ComparisonSet {
        &self.set
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn rows(&self) -> Vec<ComparisonRow> {
        self.set.rows()
    }

    pub fn remove(&mut self, id: ProductId) -> Option<Notice> {
        self.set.remove(id)
    }

    pub fn add_to_cart(&self, cart: &mut Cart, id: ProductId) -> Result<Notice, CommerceError> {
        let product = self.set.get(id).ok_or(CommerceError::ProductNotFound(id))?;
        cart.add_item(product, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fithaven_commerce::catalog::FixtureCatalog;

    #[test]
    fn test_defaults_then_empty() {
        let catalog = FixtureCatalog::load().unwrap();
        let mut page = ComparisonPage::with_defaults(&catalog).unwrap();
        assert_eq!(page.set().len(), 2);
        assert_eq!(page.rows()[0].label, "Price");

        page.remove(ProductId::new(1)).unwrap();
        page.remove(ProductId::new(2)).unwrap();
        assert!(page.is_empty());
        assert!(page.remove(ProductId::new(2)).is_none());
    }

    #[test]
    fn test_open_rejects_overflow() {
        let catalog = FixtureCatalog::load().unwrap();
        let ids: Vec<ProductId> = (1..=5).map(ProductId::new).collect();
        assert_eq!(
            ComparisonPage::open(&catalog, &ids).unwrap_err(),
            CommerceError::ComparisonFull(4)
        );
    }

    #[test]
    fn test_add_compared_to_cart() {
        let catalog = FixtureCatalog::load().unwrap();
        let page = ComparisonPage::with_defaults(&catalog).unwrap();
        let mut cart = Cart::new();
        let notice = page.add_to_cart(&mut cart, ProductId::new(2)).unwrap();
        assert_eq!(notice.message, "Olympic Barbell Set added to cart!");
        assert!(page.add_to_cart(&mut cart, ProductId::new(5)).is_err());
    }
}
