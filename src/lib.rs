//! catalog-search - Product catalog browsing with natural-language search
//!
//! Free-text queries such as "running shoes under $100 with good reviews"
//! are parsed into structured filters and applied to a static catalog, next
//! to a rule-based "recommended for you" ranking.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod filters;
pub mod format;
pub mod query;
pub mod recommend;

pub use catalog::{Catalog, CatalogError, Category, Product};
pub use config::Config;
pub use query::{filter_by_query, parse, ParsedQuery};
pub use recommend::{recommend, RecommendCriteria};
