//! CLI command implementations.

pub mod recommend;
pub mod search;

pub use recommend::RecommendCommand;
pub use search::{browse, SearchCommand};
