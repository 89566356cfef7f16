//! Keyword filtering over product name and description.

use super::Filter;
use crate::catalog::Product;

/// Requires every keyword to appear, case-insensitively, somewhere in the
/// product's name or description.
pub struct KeywordFilter {
    required: Vec<String>,
}

impl KeywordFilter {
    /// Creates a new keyword filter. Keywords are lowercased on construction.
    pub fn new(required: Vec<String>) -> Self {
        Self { required: required.into_iter().map(|k| k.to_lowercase()).collect() }
    }
}

impl Filter for KeywordFilter {
    fn matches(&self, product: &Product) -> bool {
        let haystack = product.searchable_text();
        self.required.iter().all(|keyword| haystack.contains(keyword.as_str()))
    }

    fn description(&self) -> String {
        format!("Must contain: {}", self.required.join(", "))
    }
}
