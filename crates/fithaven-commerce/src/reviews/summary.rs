//! Rating aggregate for a list of reviews.

use serde::{Deserialize, Serialize};

use crate::catalog::render_stars;
use crate::reviews::Review;

/// Distribution of ratings (1-5 stars).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingDistribution {
    pub five_star: u32,
    pub four_star: u32,
    pub three_star: u32,
    pub two_star: u32,
    pub one_star: u32,
}

impl RatingDistribution {
    /// Count reviews per star level.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut distribution = Self::default();
        for review in reviews {
            match review.rating {
                5 => distribution.five_star += 1,
                4 => distribution.four_star += 1,
                3 => distribution.three_star += 1,
                2 => distribution.two_star += 1,
                1 => distribution.one_star += 1,
                _ => {}
            }
        }
        distribution
    }

    /// Number of reviews with the given star rating.
    pub fn count(&self, stars: u8) -> u32 {
        match stars {
            5 => self.five_star,
            4 => self.four_star,
            3 => self.three_star,
            2 => self.two_star,
            1 => self.one_star,
            _ => 0,
        }
    }

    /// Get percentage for a rating level.
    pub fn percentage(&self, stars: u8, total: u32) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (self.count(stars) as f64 / total as f64) * 100.0
    }
}

/// Average and distribution of a product's reviews.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewSummary {
    pub total_reviews: u32,
    /// `None` when there are no reviews.
    pub average_rating: Option<f64>,
    pub rating_distribution: RatingDistribution,
}

impl ReviewSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let total_reviews = reviews.len() as u32;
        let average_rating = (total_reviews > 0).then(|| {
            let sum: u32 = reviews.iter().map(|r| r.rating as u32).sum();
            sum as f64 / total_reviews as f64
        });

        Self {
            total_reviews,
            average_rating,
            rating_distribution: RatingDistribution::from_reviews(reviews),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_reviews == 0
    }

    /// Share of reviews with the given star rating, 0-100.
    pub fn percentage(&self, stars: u8) -> f64 {
        self.rating_distribution
            .percentage(stars, self.total_reviews)
    }

    /// Average formatted to one decimal, or the empty-state text.
    pub fn average_display(&self) -> String {
        match self.average_rating {
            Some(avg) => format!("{:.1}", avg),
            None => "No reviews yet".to_string(),
        }
    }

    /// Whole stars to fill when drawing the average.
    pub fn filled_stars(&self) -> u8 {
        self.average_rating
            .map(|avg| avg.floor().clamp(0.0, 5.0) as u8)
            .unwrap_or(0)
    }

    /// Render the average as five stars.
    pub fn render_stars(&self) -> String {
        render_stars(self.filled_stars())
    }

    /// (stars, count, percentage) rows from five stars down to one.
    pub fn bars(&self) -> Vec<(u8, u32, f64)> {
        (1..=5u8)
            .rev()
            .map(|stars| {
                (
                    stars,
                    self.rating_distribution.count(stars),
                    self.percentage(stars),
                )
            })
            .collect()
    }
}
