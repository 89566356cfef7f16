//! catalog-search - Product catalog browsing with natural-language search
//!
//! Command-line front end over the query parser, filter and recommend engines.

use anyhow::Result;
use catalog_search::catalog::Category;
use catalog_search::commands::{RecommendCommand, SearchCommand};
use catalog_search::config::{Config, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "catalog-search",
    version,
    about = "Product catalog browsing with natural-language search",
    long_about = "Search a product catalog with plain-English queries like \"running shoes under $100 with good reviews\" and get rule-based recommendations."
)]
struct Cli {
    /// Catalog JSON file (defaults to the bundled catalog, or $CATALOG_SEARCH_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog with a natural-language query
    #[command(alias = "s")]
    Search {
        /// Free-text query
        query: String,

        /// Only show products in this category
        #[arg(long)]
        category: Option<Category>,

        /// Maximum price filter
        #[arg(long)]
        max_price: Option<f64>,
    },

    /// Show how a query is interpreted
    Parse {
        /// Free-text query
        query: String,
    },

    /// Recommend top-rated products
    #[command(alias = "r")]
    Recommend {
        /// Category currently being browsed
        #[arg(long)]
        category: Option<Category>,

        /// Id of the last viewed product; its category takes precedence
        #[arg(long)]
        last_viewed: Option<u32>,

        /// Maximum price to recommend
        #[arg(long)]
        budget: Option<f64>,
    },

    /// List categories and the words that select them
    Categories,
}

/// Config file, then environment, then CLI flags.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(catalog) = &cli.catalog {
        config.catalog = Some(catalog.clone());
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let mut config = load_config(&cli)?;

    match cli.command {
        Commands::Search { query, category, max_price } => {
            if category.is_some() {
                config.category = category;
            }
            if max_price.is_some() {
                config.max_price = max_price;
            }

            let cmd = SearchCommand::new(config);
            let output = cmd.execute(&query)?;
            println!("{}", output);
        }

        Commands::Parse { query } => {
            let cmd = SearchCommand::new(config);
            println!("{}", cmd.explain(&query));
        }

        Commands::Recommend { category, last_viewed, budget } => {
            if category.is_some() {
                config.category = category;
            }
            if budget.is_some() {
                config.budget = budget;
            }

            let cmd = RecommendCommand::new(config);
            let output = cmd.execute(last_viewed)?;
            println!("{}", output);
        }

        Commands::Categories => {
            println!("Categories (in detection priority order):\n");
            println!("{:<12} {}", "Category", "Synonyms");
            println!("{:-<12} {:-<40}", "", "");

            for category in Category::all() {
                println!("{:<12} {}", category.name(), category.synonyms().join(", "));
            }
        }
    }

    Ok(())
}
