//! Recommend command implementation.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::format::Formatter;
use crate::recommend::{recommend, RecommendCriteria};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Produces the "recommended for you" list.
pub struct RecommendCommand {
    config: Config,
}

impl RecommendCommand {
    /// Creates a new recommend command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Loads the configured catalog and executes the recommendation.
    pub fn execute(&self, last_viewed: Option<u32>) -> Result<String> {
        let catalog =
            Catalog::load(self.config.catalog.as_deref()).context("Failed to load catalog")?;

        self.execute_with_catalog(&catalog, last_viewed)
    }

    /// Executes against a provided catalog. `last_viewed` must name a product in it.
    pub fn execute_with_catalog(
        &self,
        catalog: &Catalog,
        last_viewed: Option<u32>,
    ) -> Result<String> {
        let viewed = match last_viewed {
            Some(id) => Some(catalog.get(id).context("Unknown last viewed product")?),
            None => None,
        };

        let criteria =
            RecommendCriteria::from_context(viewed, self.config.category, self.config.budget);
        debug!("Recommendation criteria: {:?}", criteria);

        let products = recommend(catalog.products(), &criteria);
        info!("Recommending {} products", products.len());

        Ok(Formatter::new(self.config.format).format_products(&products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Product};
    use crate::config::OutputFormat;

    fn make_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(1, "Road Runner", "", Category::Shoes, 90.0, 4.5),
            Product::new(2, "Trail Runner", "", Category::Shoes, 150.0, 4.8),
            Product::new(3, "Tee", "", Category::Apparel, 20.0, 4.9),
            Product::new(4, "Socks", "", Category::Apparel, 10.0, 4.9),
            Product::new(5, "Watch", "", Category::Electronics, 300.0, 4.7),
        ])
        .unwrap()
    }

    fn make_test_config() -> Config {
        Config { format: OutputFormat::Json, ..Config::default() }
    }

    fn run(config: Config, last_viewed: Option<u32>) -> Vec<u32> {
        let output =
            RecommendCommand::new(config).execute_with_catalog(&make_catalog(), last_viewed).unwrap();
        let products: Vec<Product> = serde_json::from_str(&output).unwrap();
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_no_context_ranks_whole_catalog() {
        assert_eq!(run(make_test_config(), None), vec![4, 3, 2, 5, 1]);
    }

    #[test]
    fn test_last_viewed_category() {
        assert_eq!(run(make_test_config(), Some(1)), vec![2, 1]);
    }

    #[test]
    fn test_last_viewed_beats_selected_category() {
        let config = Config { category: Some(Category::Apparel), ..make_test_config() };
        assert_eq!(run(config, Some(5)), vec![5]);
    }

    #[test]
    fn test_selected_category_fallback_with_budget() {
        let config =
            Config { category: Some(Category::Shoes), budget: Some(100.0), ..make_test_config() };
        assert_eq!(run(config, None), vec![1]);
    }

    #[test]
    fn test_unknown_last_viewed() {
        let err = RecommendCommand::new(make_test_config())
            .execute_with_catalog(&make_catalog(), Some(42))
            .unwrap_err();
        assert!(err.to_string().contains("Unknown last viewed product"));
        assert_eq!(err.root_cause().to_string(), "product not found: 42");
    }

    #[test]
    fn test_execute_bundled_catalog() {
        let output = RecommendCommand::new(make_test_config()).execute(None).unwrap();
        let products: Vec<Product> = serde_json::from_str(&output).unwrap();
        assert_eq!(products.len(), 5);
    }
}
