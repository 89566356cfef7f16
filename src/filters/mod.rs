//! Product filtering system with composable filters.

pub mod category;
pub mod keyword;
pub mod price;
pub mod rating;

use crate::catalog::{Category, Product};
use crate::query::ParsedQuery;

pub use category::CategoryFilter;
pub use keyword::KeywordFilter;
pub use price::PriceFilter;
pub use rating::RatingFilter;

/// Trait for filtering products.
pub trait Filter: Send + Sync {
    /// Returns true if the product passes the filter.
    fn matches(&self, product: &Product) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Builds the chain enforcing every constraint of a parsed query.
    pub fn from_query(parsed: &ParsedQuery) -> Self {
        FilterChainBuilder::new()
            .category(parsed.category)
            .price_range(parsed.price_min, parsed.price_max)
            .min_rating(parsed.min_rating)
            .keywords(parsed.keywords.clone())
            .build()
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if a product passes all filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Returns the matching products in their original order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    /// Returns true if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a FilterChain from optional criteria.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds an exact category filter.
    pub fn category(mut self, category: Option<Category>) -> Self {
        if let Some(category) = category {
            self.chain.add(CategoryFilter::new(category));
        }
        self
    }

    /// Adds a price range filter.
    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        if min.is_some() || max.is_some() {
            self.chain.add(PriceFilter::new(min, max));
        }
        self
    }

    /// Adds a minimum rating filter.
    pub fn min_rating(mut self, min: Option<f64>) -> Self {
        if let Some(min) = min {
            self.chain.add(RatingFilter::new(min));
        }
        self
    }

    /// Adds required keywords filter.
    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        if !keywords.is_empty() {
            self.chain.add(KeywordFilter::new(keywords));
        }
        self
    }

    /// Builds the filter chain.
    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(category: Category, price: f64, rating: f64) -> Product {
        Product::new(1, "Test Product", "A test product", category, price, rating)
    }

    fn make_product_with_name(name: &str, description: &str) -> Product {
        Product::new(1, name, description, Category::Apparel, 25.0, 4.0)
    }

    // FilterChain tests

    #[test]
    fn test_filter_chain_new() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn test_filter_chain_default() {
        let chain = FilterChain::default();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_filter_chain() {
        let mut chain = FilterChain::new();
        chain.add(PriceFilter::new(Some(10.0), Some(50.0)));
        chain.add(RatingFilter::new(4.0));

        assert_eq!(chain.len(), 2);
        assert!(!chain.is_empty());

        // Should pass: price 25, rating 4.5
        assert!(chain.matches(&make_product(Category::Shoes, 25.0, 4.5)));

        // Should fail: price too low
        assert!(!chain.matches(&make_product(Category::Shoes, 5.0, 4.5)));

        // Should fail: rating too low
        assert!(!chain.matches(&make_product(Category::Shoes, 25.0, 3.5)));
    }

    #[test]
    fn test_filter_chain_empty_matches_all() {
        let chain = FilterChain::new();
        assert!(chain.matches(&make_product(Category::Equipment, 0.0, 0.0)));
    }

    #[test]
    fn test_filter_chain_apply() {
        let mut chain = FilterChain::new();
        chain.add(PriceFilter::new(Some(20.0), None));

        let products = vec![
            make_product(Category::Shoes, 10.0, 4.0),
            make_product(Category::Shoes, 30.0, 4.0),
            make_product(Category::Shoes, 50.0, 4.0),
        ];

        let filtered = chain.apply(&products);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].price, 30.0);
        assert_eq!(filtered[1].price, 50.0);
        assert_eq!(products.len(), 3);
    }

    #[test]
    fn test_filter_chain_descriptions() {
        let mut chain = FilterChain::new();
        chain.add(CategoryFilter::new(Category::Shoes));
        chain.add(PriceFilter::new(Some(10.0), Some(50.0)));
        chain.add(RatingFilter::new(4.0));

        let descriptions = chain.descriptions();
        assert_eq!(descriptions.len(), 3);
        assert!(descriptions[0].contains("Category"));
        assert!(descriptions[1].contains("Price"));
        assert!(descriptions[2].contains("Rating"));
    }

    #[test]
    fn test_from_query_empty() {
        let chain = FilterChain::from_query(&ParsedQuery::default());
        assert!(chain.is_empty());
    }

    #[test]
    fn test_from_query_full() {
        let parsed = ParsedQuery {
            keywords: vec!["trail".to_string()],
            category: Some(Category::Shoes),
            price_min: Some(50.0),
            price_max: None,
            min_rating: Some(4.2),
        };

        let chain = FilterChain::from_query(&parsed);
        assert_eq!(chain.len(), 4);

        let mut product = make_product(Category::Shoes, 80.0, 4.5);
        product.name = "Trail Runner".to_string();
        assert!(chain.matches(&product));

        product.category = Category::Apparel;
        assert!(!chain.matches(&product));
    }

    // FilterChainBuilder tests

    #[test]
    fn test_filter_chain_builder() {
        let chain = FilterChainBuilder::new()
            .category(Some(Category::Electronics))
            .price_range(Some(10.0), Some(100.0))
            .min_rating(Some(4.0))
            .keywords(vec!["gps".to_string()])
            .build();

        assert_eq!(chain.len(), 4);
    }

    #[test]
    fn test_filter_chain_builder_default() {
        let builder = FilterChainBuilder::default();
        let chain = builder.build();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_filter_chain_builder_no_filters_when_disabled() {
        let chain = FilterChainBuilder::new()
            .category(None)
            .price_range(None, None)
            .min_rating(None)
            .keywords(Vec::new())
            .build();

        assert!(chain.is_empty());
    }

    #[test]
    fn test_filter_chain_builder_keywords() {
        let chain =
            FilterChainBuilder::new().keywords(vec!["merino".to_string(), "socks".to_string()]).build();

        assert_eq!(chain.len(), 1);

        assert!(chain.matches(&make_product_with_name("Merino Crew Socks", "")));
        assert!(chain.matches(&make_product_with_name("Merino Crew", "Warm hiking socks")));
        assert!(!chain.matches(&make_product_with_name("Cotton Socks", ""))); // Missing "merino"
    }

    #[test]
    fn test_filter_chain_builder_price_min_only() {
        let chain = FilterChainBuilder::new().price_range(Some(20.0), None).build();

        assert_eq!(chain.len(), 1);
        assert!(chain.matches(&make_product(Category::Shoes, 25.0, 4.0)));
        assert!(!chain.matches(&make_product(Category::Shoes, 10.0, 4.0)));
    }

    #[test]
    fn test_filter_chain_builder_price_max_only() {
        let chain = FilterChainBuilder::new().price_range(None, Some(50.0)).build();

        assert_eq!(chain.len(), 1);
        assert!(chain.matches(&make_product(Category::Shoes, 25.0, 4.0)));
        assert!(!chain.matches(&make_product(Category::Shoes, 100.0, 4.0)));
    }

    // Integration test with all filters

    #[test]
    fn test_all_filters_combined() {
        let chain = FilterChainBuilder::new()
            .category(Some(Category::Shoes))
            .price_range(Some(20.0), Some(100.0))
            .min_rating(Some(4.0))
            .keywords(vec!["trail".to_string()])
            .build();

        assert_eq!(chain.len(), 4);

        // Product that passes all filters
        let mut product = make_product(Category::Shoes, 50.0, 4.5);
        product.name = "Trail Shoe".to_string();
        assert!(chain.matches(&product));

        // Fails category filter
        product.category = Category::Apparel;
        assert!(!chain.matches(&product));
        product.category = Category::Shoes;

        // Fails price filter
        product.price = 10.0;
        assert!(!chain.matches(&product));
        product.price = 50.0;

        // Fails rating filter
        product.rating = 3.5;
        assert!(!chain.matches(&product));
        product.rating = 4.5;

        // Fails keyword filter
        product.name = "Road Shoe".to_string();
        assert!(!chain.matches(&product));
    }
}
