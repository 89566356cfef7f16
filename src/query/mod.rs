//! Natural-language query parsing into structured filter predicates.

pub mod parser;

pub use parser::parse;

use crate::catalog::{Category, Product};
use crate::filters::FilterChain;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Structured form of a free-text query.
///
/// Every bound is either absent (unconstrained) or a finite, non-negative
/// number. A value is built fresh per parse and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Residual lowercase terms that must all appear in name + description
    pub keywords: Vec<String>,
    /// Detected category constraint
    pub category: Option<Category>,
    /// Inclusive lower price bound
    pub price_min: Option<f64>,
    /// Inclusive upper price bound
    pub price_max: Option<f64>,
    /// Inclusive rating floor
    pub min_rating: Option<f64>,
}

impl ParsedQuery {
    /// Returns true if the query places no constraint on products.
    pub fn is_unconstrained(&self) -> bool {
        self.keywords.is_empty()
            && self.category.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.min_rating.is_none()
    }
}

/// Returns the products satisfying every constraint in `parsed`, in their
/// original order. The input slice is left untouched.
pub fn filter_by_query(products: &[Product], parsed: &ParsedQuery) -> Vec<Product> {
    let chain = FilterChain::from_query(parsed);

    if !chain.is_empty() {
        debug!("Query filters: {}", chain.descriptions().join(", "));
    }

    chain.apply(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: u32, name: &str, category: Category, price: f64, rating: f64) -> Product {
        Product::new(id, name, "", category, price, rating)
    }

    fn make_catalog() -> Vec<Product> {
        vec![
            make_product(1, "Road Runner", Category::Shoes, 90.0, 4.5),
            make_product(2, "Trail Runner", Category::Shoes, 150.0, 4.8),
            make_product(3, "Cotton Tee", Category::Apparel, 20.0, 3.9),
            make_product(4, "Steel Bottle", Category::Accessories, 25.0, 4.7),
        ]
    }

    #[test]
    fn test_default_is_unconstrained() {
        let parsed = ParsedQuery::default();
        assert!(parsed.is_unconstrained());
        assert!(parsed.keywords.is_empty());
    }

    #[test]
    fn test_any_field_constrains() {
        let parsed = ParsedQuery { price_max: Some(10.0), ..Default::default() };
        assert!(!parsed.is_unconstrained());

        let parsed = ParsedQuery { keywords: vec!["red".to_string()], ..Default::default() };
        assert!(!parsed.is_unconstrained());
    }

    #[test]
    fn test_unconstrained_query_returns_everything_in_order() {
        let products = make_catalog();
        let result = filter_by_query(&products, &ParsedQuery::default());
        assert_eq!(result, products);
    }

    #[test]
    fn test_filter_by_query_all_constraints() {
        let products = make_catalog();
        let parsed = ParsedQuery {
            keywords: vec!["road".to_string()],
            category: Some(Category::Shoes),
            price_min: Some(50.0),
            price_max: Some(100.0),
            min_rating: Some(4.0),
        };

        let result = filter_by_query(&products, &parsed);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_filter_by_query_preserves_order() {
        let products = make_catalog();
        let parsed = ParsedQuery { min_rating: Some(4.5), ..Default::default() };

        let ids: Vec<u32> = filter_by_query(&products, &parsed).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_filter_by_query_empty_input() {
        let parsed = ParsedQuery { category: Some(Category::Shoes), ..Default::default() };
        assert!(filter_by_query(&[], &parsed).is_empty());
    }

    #[test]
    fn test_filter_by_query_does_not_mutate_input() {
        let products = make_catalog();
        let before = products.clone();
        let parsed = ParsedQuery { price_max: Some(30.0), ..Default::default() };

        let _ = filter_by_query(&products, &parsed);
        assert_eq!(products, before);
    }

    #[test]
    fn test_parsed_query_serde() {
        let parsed = ParsedQuery {
            keywords: vec!["jacket".to_string()],
            category: Some(Category::Apparel),
            price_min: None,
            price_max: Some(100.0),
            min_rating: Some(4.2),
        };

        let json = serde_json::to_string(&parsed).unwrap();
        assert!(json.contains("\"category\":\"Apparel\""));
        assert!(json.contains("\"price_min\":null"));

        let back: ParsedQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(back, parsed);
    }
}
