// src/recipe/entry.rs

//! Validation of raw registration payloads
//!
//! Payloads arrive as untyped JSON. They are checked field by field, in a
//! fixed order, and the first failing check rejects the whole entry:
//!
//! 1. `name` is a non-empty string
//! 2. `type` is `"ingredient"` or `"recipe"`
//! 3. ingredients: `cookTime` is a non-negative integer
//! 4. recipes: `requiredItems` is an array of `{name: string, quantity: number}`
//!    with no name listed twice
//!
//! Name uniqueness across the catalog is checked by [`Catalog::register`]
//! after the payload itself has passed.
//!
//! [`Catalog::register`]: super::Catalog::register

use super::{Ingredient, Item, Recipe, RequiredItem};
use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashSet;

/// Validate a JSON payload and build the item it describes
pub fn parse_entry(value: &Value) -> Result<Item> {
    let name = match value.get("name") {
        Some(Value::String(name)) if !name.is_empty() => name.clone(),
        Some(Value::String(_)) => return Err(invalid("name must not be empty")),
        _ => return Err(invalid("name must be a string")),
    };

    match value.get("type").and_then(Value::as_str) {
        Some("ingredient") => {
            let cook_time = parse_cook_time(value.get("cookTime"))?;
            Ok(Item::Ingredient(Ingredient { name, cook_time }))
        }
        Some("recipe") => {
            let required_items = parse_required_items(value.get("requiredItems"))?;
            Ok(Item::Recipe(Recipe {
                name,
                required_items,
            }))
        }
        Some(other) => Err(invalid(format!(
            "type must be \"ingredient\" or \"recipe\", got {:?}",
            other
        ))),
        None => Err(invalid("type must be \"ingredient\" or \"recipe\"")),
    }
}

fn parse_cook_time(value: Option<&Value>) -> Result<u64> {
    let number = match value {
        Some(Value::Number(number)) => number,
        _ => return Err(invalid("cookTime must be a number")),
    };

    if let Some(cook_time) = number.as_u64() {
        return Ok(cook_time);
    }
    if number.as_f64().is_some_and(|n| n < 0.0) {
        return Err(invalid("cookTime must be >= 0"));
    }
    Err(invalid("cookTime must be a whole number"))
}

fn parse_required_items(value: Option<&Value>) -> Result<Vec<RequiredItem>> {
    let elements = match value {
        Some(Value::Array(elements)) => elements,
        _ => return Err(invalid("requiredItems must be an array")),
    };

    let mut seen = HashSet::new();
    let mut required_items = Vec::with_capacity(elements.len());

    for (index, element) in elements.iter().enumerate() {
        let name = element
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid(format!("requiredItems[{}].name must be a string", index)))?;

        let quantity = element
            .get("quantity")
            .and_then(Value::as_f64)
            .ok_or_else(|| invalid(format!("requiredItems[{}].quantity must be a number", index)))?;

        if !seen.insert(name) {
            return Err(invalid(format!(
                "requiredItems lists '{}' more than once",
                name
            )));
        }

        required_items.push(RequiredItem::new(name, quantity));
    }

    Ok(required_items)
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidItem(message.into())
}
