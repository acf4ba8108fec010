//! Product reviews module.
//!
//! Contains the review record, the rating aggregate, and the review board
//! that backs the "Customer Reviews" widget.

mod board;
mod review;
mod summary;

pub use board::ReviewBoard;
pub use review::{Review, ReviewDraft};
pub use summary::{RatingDistribution, ReviewSummary};
