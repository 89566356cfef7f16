//! Exact category filter.

use super::Filter;
use crate::catalog::{Category, Product};

/// Keeps only products listed under one category.
pub struct CategoryFilter {
    category: Category,
}

impl CategoryFilter {
    pub fn new(category: Category) -> Self {
        Self { category }
    }
}

impl Filter for CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        product.category == self.category
    }

    fn description(&self) -> String {
        format!("Category: {}", self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(category: Category) -> Product {
        Product::new(1, "Test", "Test", category, 10.0, 4.0)
    }

    #[test]
    fn test_category_filter() {
        let filter = CategoryFilter::new(Category::Electronics);

        assert!(filter.matches(&make_product(Category::Electronics)));
        assert!(!filter.matches(&make_product(Category::Equipment)));
        assert!(!filter.matches(&make_product(Category::Shoes)));
    }

    #[test]
    fn test_description() {
        let filter = CategoryFilter::new(Category::Accessories);
        assert_eq!(filter.description(), "Category: Accessories");
    }
}
