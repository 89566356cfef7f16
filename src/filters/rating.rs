//! Minimum rating filter.

use super::Filter;
use crate::catalog::Product;

/// Filters products by an inclusive rating floor.
pub struct RatingFilter {
    min_rating: f64,
}

impl RatingFilter {
    /// Creates a new rating filter. The floor is not clamped: a parsed
    /// threshold above 5 simply matches nothing on a 0-5 scale.
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for RatingFilter {
    fn matches(&self, product: &Product) -> bool {
        product.rating >= self.min_rating
    }

    fn description(&self) -> String {
        format!("Rating: >= {:.1} stars", self.min_rating)
    }
}
