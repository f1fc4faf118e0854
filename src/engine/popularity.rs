//! Popularity index used to badge listings.
//!
//! ```text
//! rating half : (rating / 5.0) * 50          (skipped when unrated)
//! review half : min(reviews / 100, 1) * 50   (100+ reviews saturate)
//! score       : round(rating + review, 1 decimal) in 0..=100
//! ```

use crate::RestaurantRecord;
use std::fmt;

const MAX_RATING: f64 = 5.0;
const REVIEW_SATURATION: f64 = 100.0;
const HALF_WEIGHT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopularityTier {
    TopRated,
    HighlyPopular,
    Popular,
    Average,
    NewOrLimited,
}

impl PopularityTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            PopularityTier::TopRated
        } else if score >= 70.0 {
            PopularityTier::HighlyPopular
        } else if score >= 50.0 {
            PopularityTier::Popular
        } else if score >= 30.0 {
            PopularityTier::Average
        } else {
            PopularityTier::NewOrLimited
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PopularityTier::TopRated => "Top Rated",
            PopularityTier::HighlyPopular => "Highly Popular",
            PopularityTier::Popular => "Popular",
            PopularityTier::Average => "Average",
            PopularityTier::NewOrLimited => "New/Limited Data",
        }
    }
}

impl fmt::Display for PopularityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Popularity {
    pub score: f64,
    pub tier: PopularityTier,
}

/// Compute the popularity index of a record.
pub fn popularity(record: &RestaurantRecord) -> Popularity {
    let mut score = 0.0;
    if record.rating > 0.0 {
        score += (record.rating / MAX_RATING) * HALF_WEIGHT;
    }
    if record.review_count > 0 {
        score += (f64::from(record.review_count) / REVIEW_SATURATION).min(1.0) * HALF_WEIGHT;
    }
    let score = (score * 10.0).round() / 10.0;
    Popularity { score, tier: PopularityTier::from_score(score) }
}
