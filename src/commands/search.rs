//! Search command implementation.

use crate::catalog::{Catalog, Category, Product};
use crate::config::Config;
use crate::filters::FilterChainBuilder;
use crate::format::Formatter;
use crate::query;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Runs the browse pipeline: category and max-price pre-filters, then the
/// natural-language query. A query that parses to no constraint at all
/// (blank, or only stopwords) skips the smart filter.
pub fn browse(
    products: &[Product],
    category: Option<Category>,
    max_price: Option<f64>,
    text: &str,
) -> Vec<Product> {
    let prefilters =
        FilterChainBuilder::new().category(category).price_range(None, max_price).build();

    if !prefilters.is_empty() {
        debug!("Pre-filters: {}", prefilters.descriptions().join(", "));
    }

    let base = prefilters.apply(products);

    let parsed = query::parse(text);
    if parsed.is_unconstrained() {
        return base;
    }
    debug!("Parsed query: {:?}", parsed);

    query::filter_by_query(&base, &parsed)
}

/// Executes a catalog search.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Loads the configured catalog and executes the search.
    pub fn execute(&self, text: &str) -> Result<String> {
        let catalog =
            Catalog::load(self.config.catalog.as_deref()).context("Failed to load catalog")?;

        Ok(self.execute_with_catalog(&catalog, text))
    }

    /// Executes the search against a provided catalog.
    pub fn execute_with_catalog(&self, catalog: &Catalog, text: &str) -> String {
        info!("Searching for: {}", text);

        let products =
            browse(catalog.products(), self.config.category, self.config.max_price, text);

        info!("Found {} products matching criteria", products.len());

        Formatter::new(self.config.format).format_products(&products)
    }

    /// Parses a query without running it.
    pub fn explain(&self, text: &str) -> String {
        Formatter::new(self.config.format).format_query(&query::parse(text))
    }
}
