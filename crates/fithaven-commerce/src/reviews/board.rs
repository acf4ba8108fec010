use chrono::NaiveDate;

use crate::error::CommerceError;
use crate::ids::{ProductId, ReviewId};
use crate::notice::Notice;
use crate::reviews::{Review, ReviewDraft, ReviewSummary};

/// Reviews shown for one product, plus the "Write a Review" form.
///
/// Submitted reviews live only in memory for the lifetime of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewBoard {
    product_id: ProductId,
    reviews: Vec<Review>,
    pub draft: ReviewDraft,
    form_open: bool,
}

impl ReviewBoard {
    pub fn new(product_id: ProductId, reviews: Vec<Review>) -> Self {
        Self {
            product_id,
            reviews,
            draft: ReviewDraft::default(),
            form_open: false,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn summary(&self) -> ReviewSummary {
        ReviewSummary::from_reviews(&self.reviews)
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Show or hide the review form.
    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }

    /// Close the form and discard the draft.
    pub fn cancel(&mut self) {
        self.form_open = false;
        self.draft = ReviewDraft::default();
    }

    /// Submit the current draft.
    ///
    /// On failure the draft is kept so the shopper can fix it.
    pub fn submit(&mut self, date: NaiveDate) -> Result<Notice, CommerceError> {
        self.draft.validate()?;

        let id = self
            .reviews
            .iter()
            .map(|r| r.id)
            .max()
            .map(|id| id.next())
            .unwrap_or_else(|| ReviewId::new(1));
        let review = std::mem::take(&mut self.draft).into_review(id, self.product_id, date)?;

        tracing::info!(product_id = %self.product_id, review_id = %id, rating = review.rating, "review submitted");
        self.reviews.push(review);
        self.form_open = false;
        Ok(Notice::success("Review submitted successfully!"))
    }

    /// Record a "helpful" vote and return the new count.
    pub fn mark_helpful(&mut self, review_id: ReviewId) -> Result<u32, CommerceError> {
        let review = self
            .reviews
            .iter_mut()
            .find(|r| r.id == review_id)
            .ok_or(CommerceError::ReviewNotFound(review_id))?;
        review.helpful = review.helpful.saturating_add(1);
        Ok(review.helpful)
    }
}
