//! Wishlist ("liked") flags.
//!
//! Flags live only as long as the page that owns them; nothing is saved
//! or shared between pages.

use std::collections::HashSet;

use crate::ids::ProductId;
use crate::notice::Notice;

/// Products the shopper has liked on the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    liked: HashSet<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the liked flag for a product.
    ///
    /// Returns the new state and the notice to show.
    pub fn toggle(&mut self, product_id: ProductId) -> (bool, Notice) {
        if self.liked.remove(&product_id) {
            (false, Notice::success("Removed from wishlist"))
        } else {
            self.liked.insert(product_id);
            (true, Notice::success("Added to wishlist"))
        }
    }

    pub fn is_liked(&self, product_id: ProductId) -> bool {
        self.liked.contains(&product_id)
    }

    pub fn len(&self) -> usize {
        self.liked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.liked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut wishlist = Wishlist::new();
        let id = ProductId::new(3);

        let (liked, notice) = wishlist.toggle(id);
        assert!(liked);
        assert_eq!(notice.message, "Added to wishlist");
        assert!(wishlist.is_liked(id));

        let (liked, notice) = wishlist.toggle(id);
        assert!(!liked);
        assert_eq!(notice.message, "Removed from wishlist");
        assert!(wishlist.is_empty());
    }
}
