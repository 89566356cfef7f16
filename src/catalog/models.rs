//! Data models for catalog products and categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category. Serialized with its capitalized name ("Shoes").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Shoes,
    Apparel,
    Accessories,
    Electronics,
    Equipment,
}

impl Category {
    /// All categories in detection priority order.
    pub const ALL: [Category; 5] = [
        Category::Shoes,
        Category::Apparel,
        Category::Accessories,
        Category::Electronics,
        Category::Equipment,
    ];

    /// Returns all categories in detection priority order.
    pub fn all() -> &'static [Category] {
        &Self::ALL
    }

    /// Returns the display name, which is also the exact value products carry.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Shoes => "Shoes",
            Category::Apparel => "Apparel",
            Category::Accessories => "Accessories",
            Category::Electronics => "Electronics",
            Category::Equipment => "Equipment",
        }
    }

    /// Returns the lowercase trigger words that select this category in a query.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Category::Shoes => &["shoes", "sneakers", "running", "runner", "boots", "hiking"],
            Category::Apparel => &[
                "apparel", "tee", "tshirt", "t-shirt", "joggers", "hoodie", "socks", "shirt",
                "pants",
            ],
            Category::Accessories => &["accessories", "bottle", "armband", "mat", "strap"],
            Category::Electronics => &["electronics", "watch", "fitness", "tracker"],
            Category::Equipment => &["equipment", "dumbbells", "weights"],
        }
    }

    /// Returns true if `word` is one of this category's synonyms.
    pub fn is_synonym(&self, word: &str) -> bool {
        self.synonyms().contains(&word)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shoes" => Ok(Category::Shoes),
            "apparel" => Ok(Category::Apparel),
            "accessories" => Ok(Category::Accessories),
            "electronics" => Ok(Category::Electronics),
            "equipment" => Ok(Category::Equipment),
            _ => Err(format!(
                "Unknown category: {}. Use: shoes, apparel, accessories, electronics, equipment",
                s
            )),
        }
    }
}

/// A catalog product. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, stable for the session
    pub id: u32,
    /// Product name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Category the product is listed under
    pub category: Category,
    /// Price in catalog currency
    pub price: f64,
    /// Average rating, conventionally 0.0 - 5.0
    pub rating: f64,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        price: f64,
        rating: f64,
    ) -> Self {
        Self { id, name: name.into(), description: description.into(), category, price, rating }
    }

    /// Returns the lowercased name and description joined by a space,
    /// the text keyword terms are matched against.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }
}
