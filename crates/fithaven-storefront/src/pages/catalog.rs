//! Product listing page.

use std::sync::Arc;

use fithaven_commerce::cart::Cart;
use fithaven_commerce::catalog::{CatalogProvider, Product};
use fithaven_commerce::compare::ComparisonSet;
use fithaven_commerce::search::{CatalogQuery, CategoryFilter, QueryResults, SortOption};
use fithaven_commerce::wishlist::Wishlist;
use fithaven_commerce::{CommerceError, Notice, ProductId};

/// State behind the "Our Products" page.
///
/// Visible products are re-derived whenever the query changes; the last
/// result is kept until then.
pub struct CatalogPage {
    catalog: Arc<dyn CatalogProvider>,
    query: CatalogQuery,
    cached: Option<(CatalogQuery, Vec<ProductId>)>,
    comparison: ComparisonSet,
    wishlist: Wishlist,
}

impl CatalogPage {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            catalog,
            query: CatalogQuery::new(),
            cached: None,
            comparison: ComparisonSet::new(),
            wishlist: Wishlist::new(),
        }
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.query.category = CategoryFilter::parse(category);
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.query.sort = sort;
    }

    /// The "Clear Filters" action on the empty state.
    pub fn reset_filters(&mut self) {
        self.query.reset_filters();
    }

    /// Category drop-down values.
    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    /// Whether the current query's result is already cached.
    pub fn is_cached(&self) -> bool {
        matches!(&self.cached, Some((query, _)) if *query == self.query)
    }

    /// Products visible under the current query.
    pub fn results(&mut self) -> QueryResults<'_> {
        if !self.is_cached() {
            let ids = self.query.apply(self.catalog.products()).ids();
            self.cached = Some((self.query.clone(), ids));
        }

        let ids = self
            .cached
            .as_ref()
            .map(|(_, ids)| ids.as_slice())
            .unwrap_or_default();
        let items = ids
            .iter()
            .filter_map(|id| self.catalog.product(*id))
            .collect();
        QueryResults::new(items, self.catalog.products().len())
    }

    fn product(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.catalog
            .product(id)
            .ok_or(CommerceError::ProductNotFound(id))
    }

    /// "Add to Cart" on a product card.
    pub fn add_to_cart(&self, cart: &mut Cart, id: ProductId) -> Result<Notice, CommerceError> {
        cart.add_item(self.product(id)?, 1)
    }

    /// "Compare" on a product card.
    pub fn add_to_comparison(&mut self, id: ProductId) -> Result<Notice, CommerceError> {
        let product = self
            .catalog
            .product(id)
            .ok_or(CommerceError::ProductNotFound(id))?;
        self.comparison.add(product)
    }

    pub fn remove_from_comparison(&mut self, id: ProductId) -> Option<Notice> {
        self.comparison.remove(id)
    }

    pub fn comparison(&self) -> &ComparisonSet {
        &self.comparison
    }

    /// Heart button on a product card.
    pub fn toggle_like(&mut self, id: ProductId) -> Result<(bool, Notice), CommerceError> {
        self.product(id)?;
        Ok(self.wishlist.toggle(id))
    }

    pub fn is_liked(&self, id: ProductId) -> bool {
        self.wishlist.is_liked(id)
    }
}
