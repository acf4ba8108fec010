//! Review records and the review form draft.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{render_stars, MAX_RATING};
use crate::error::CommerceError;
use crate::ids::{ProductId, ReviewId};

/// Individual review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub author: String,
    pub rating: u8,
    pub title: String,
    pub body: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub helpful: u32,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Review {
    /// Check that the rating is within 1-5.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if !(1..=MAX_RATING).contains(&self.rating) {
            return Err(CommerceError::InvalidRating(self.rating));
        }
        Ok(())
    }

    /// Render star rating.
    pub fn render_stars(&self) -> String {
        render_stars(self.rating)
    }
}

/// What the shopper has typed into the "Write a Review" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewDraft {
    pub author: String,
    /// Selected star rating; 0 means none selected yet.
    pub rating: u8,
    pub title: String,
    pub body: String,
}

impl ReviewDraft {
    /// Check that every field is filled in.
    ///
    /// Missing fields are reported together so the form can highlight them.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.rating > MAX_RATING {
            return Err(CommerceError::InvalidRating(self.rating));
        }

        let mut missing = Vec::new();
        if self.author.trim().is_empty() {
            missing.push("name");
        }
        if self.rating == 0 {
            missing.push("rating");
        }
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.body.trim().is_empty() {
            missing.push("review");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::IncompleteReview { missing })
        }
    }

    /// Turn a valid draft into a review.
    pub fn into_review(
        self,
        id: ReviewId,
        product_id: ProductId,
        date: NaiveDate,
    ) -> Result<Review, CommerceError> {
        self.validate()?;
        Ok(Review {
            id,
            product_id,
            author: self.author.trim().to_string(),
            rating: self.rating,
            title: self.title.trim().to_string(),
            body: self.body.trim().to_string(),
            date,
            verified: false,
            helpful: 0,
            images: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ReviewDraft {
        ReviewDraft {
            author: "Jamie Lee".to_string(),
            rating: 4,
            title: "Sturdy".to_string(),
            body: "Holds up to daily use.".to_string(),
        }
    }

    #[test]
    fn test_complete_draft_is_valid() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_reported() {
        let incomplete = ReviewDraft {
            rating: 0,
            title: "  ".to_string(),
            ..draft()
        };
        let err = incomplete.validate().unwrap_err();
        assert_eq!(
            err,
            CommerceError::IncompleteReview {
                missing: vec!["rating", "title"]
            }
        );
        assert_eq!(err.to_string(), "Please fill in all fields");
    }

    #[test]
    fn test_rating_out_of_range() {
        let draft = ReviewDraft { rating: 6, ..draft() };
        assert_eq!(draft.validate(), Err(CommerceError::InvalidRating(6)));
    }

    #[test]
    fn test_into_review() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let review = draft()
            .into_review(ReviewId::new(4), ProductId::new(1), date)
            .unwrap();
        assert_eq!(review.rating, 4);
        assert!(!review.verified);
        assert_eq!(review.helpful, 0);
        assert_eq!(review.render_stars(), "★★★★☆");
    }

    #[test]
    fn test_review_date_parses_from_fixture_format() {
        let json = r#"{"id":1,"product_id":1,"author":"A","rating":5,"title":"T","body":"B","date":"2024-05-15"}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.date, NaiveDate::from_ymd_opt(2024, 5, 15).unwrap());
        assert!(review.images.is_empty());
    }
}
