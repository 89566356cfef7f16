//! Product catalog: the ordered, read-only collection searches run against.

pub mod models;

pub use models::{Category, Product};

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const BUNDLED_CATALOG: &str = include_str!("../../data/products.json");

/// Errors raised when a catalog is rejected or queried for something it lacks.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate product id: {0}")]
    DuplicateId(u32),

    #[error("product {id} has invalid price: {price}")]
    InvalidPrice { id: u32, price: f64 },

    #[error("product {id} has invalid rating: {rating}")]
    InvalidRating { id: u32, rating: f64 },

    #[error("product not found: {0}")]
    NotFound(u32),
}

/// An ordered collection of validated products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids, negative or non-finite
    /// prices and non-finite ratings. Input order is kept.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidPrice { id: product.id, price: product.price });
            }
            if !product.rating.is_finite() {
                return Err(CatalogError::InvalidRating { id: product.id, rating: product.rating });
            }
        }

        Ok(Self { products })
    }

    /// Parses a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        Ok(Self::new(products)?)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        Self::from_json(&content)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))
    }

    /// Returns the sample catalog compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG).context("Bundled catalog is invalid")
    }

    /// Loads from `path` when given, otherwise falls back to the bundled catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                debug!("No catalog file configured, using bundled catalog");
                Self::bundled()?
            }
        };
        debug!("Catalog has {} products", catalog.len());
        Ok(catalog)
    }

    /// Returns the products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: u32) -> Result<&Product, CatalogError> {
        self.products.iter().find(|p| p.id == id).ok_or(CatalogError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
