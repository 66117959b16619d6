// src/recipe/mod.rs

//! Cookbook data model, catalog and recipe resolution
//!
//! A cookbook holds two kinds of items that share one namespace:
//! - **Ingredient**: a leaf with a fixed cook time
//! - **Recipe**: a list of required items, each naming another item and a quantity
//!
//! Recipes refer to their requirements by name only. A recipe may be
//! registered before the items it needs; missing names are reported when the
//! recipe is summarized.
//!
//! # Example
//!
//! ```ignore
//! use cookbook::{Catalog, Resolver};
//! use serde_json::json;
//!
//! let mut catalog = Catalog::new();
//! catalog.register_json(&json!({"type": "ingredient", "name": "Egg", "cookTime": 6}))?;
//! catalog.register_json(&json!({
//!     "type": "recipe",
//!     "name": "Omelette",
//!     "requiredItems": [{"name": "Egg", "quantity": 3}]
//! }))?;
//!
//! let summary = Resolver::new(&catalog).summarize("Omelette")?;
//! assert_eq!(summary.cook_time, 6);
//! ```

mod catalog;
pub mod entry;
mod summary;

pub use catalog::Catalog;
pub use entry::parse_entry;
pub use summary::Resolver;

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A reference from a recipe to another item, by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    /// Any finite number; fractions and negatives are kept as given
    #[serde(serialize_with = "serialize_quantity")]
    pub quantity: f64,
}

/// Largest magnitude below which every integer is exact in an `f64`
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Whole quantities go out as JSON integers
fn serialize_quantity<S: Serializer>(
    quantity: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if quantity.fract() == 0.0 && quantity.abs() < EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*quantity as i64)
    } else {
        serializer.serialize_f64(*quantity)
    }
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A leaf item with a fixed cook time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub cook_time: u64,
}

/// A composite item built from other items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// A registered cookbook entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Item {
    /// Name shared by both variants
    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient(ingredient) => &ingredient.name,
            Self::Recipe(recipe) => &recipe.name,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Ingredient(_) => ItemKind::Ingredient,
            Self::Recipe(_) => ItemKind::Recipe,
        }
    }

    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Self::Recipe(recipe) => Some(recipe),
            Self::Ingredient(_) => None,
        }
    }
}

/// Discriminant of an [`Item`], matching the wire `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Ingredient,
    Recipe,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ingredient => "ingredient",
            Self::Recipe => "recipe",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flattened result of expanding a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    /// Sum of leaf cook times, once per occurrence in the expansion
    pub cook_time: u64,
    /// Leaf ingredients in order of first occurrence, names unique
    pub required_ingredients: Vec<RequiredItem>,
}

impl Summary {
    /// Empty summary for the named recipe
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cook_time: 0,
            required_ingredients: Vec::new(),
        }
    }

    /// Quantity recorded for an ingredient, if it appeared
    pub fn quantity_of(&self, ingredient: &str) -> Option<f64> {
        self.required_ingredients
            .iter()
            .find(|item| item.name == ingredient)
            .map(|item| item.quantity)
    }
}
