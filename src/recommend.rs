//! Rule-based "recommended for you" ranking.

use crate::catalog::{Category, Product};
use crate::filters::FilterChainBuilder;
use std::cmp::Ordering;

/// Maximum number of recommendations returned.
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Inputs narrowing the recommendation pool.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecommendCriteria {
    /// Category of the product the user last looked at
    pub last_category: Option<Category>,
    /// Inclusive price ceiling
    pub budget: Option<f64>,
}

impl RecommendCriteria {
    pub fn new(last_category: Option<Category>, budget: Option<f64>) -> Self {
        Self { last_category, budget }
    }

    /// Derives criteria from browsing context: the last viewed product's
    /// category wins, falling back to the category currently selected.
    pub fn from_context(
        last_viewed: Option<&Product>,
        selected_category: Option<Category>,
        budget: Option<f64>,
    ) -> Self {
        Self { last_category: last_viewed.map(|p| p.category).or(selected_category), budget }
    }
}

/// Returns up to [`RECOMMENDATION_LIMIT`] products matching `criteria`,
/// ordered by rating descending then price ascending. Exact ties keep
/// catalog order.
pub fn recommend(products: &[Product], criteria: &RecommendCriteria) -> Vec<Product> {
    let mut ranked = FilterChainBuilder::new()
        .category(criteria.last_category)
        .price_range(None, criteria.budget)
        .build()
        .apply(products);

    // sort_by is stable
    ranked.sort_by(rank_order);
    ranked.truncate(RECOMMENDATION_LIMIT);
    ranked
}

fn rank_order(a: &Product, b: &Product) -> Ordering {
    b.rating.total_cmp(&a.rating).then_with(|| a.price.total_cmp(&b.price))
}
