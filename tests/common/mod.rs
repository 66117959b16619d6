// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use cookbook::Catalog;
use serde_json::{json, Value};

/// Build a catalog from payloads, panicking on any rejection.
pub fn catalog_from(entries: &[Value]) -> Catalog {
    let mut catalog = Catalog::new();
    for entry in entries {
        catalog.register_json(entry).unwrap();
    }
    catalog
}

pub fn ingredient(name: &str, cook_time: u64) -> Value {
    json!({"type": "ingredient", "name": name, "cookTime": cook_time})
}

/// Recipe payload from (name, quantity) pairs
pub fn recipe(name: &str, required: &[(&str, i64)]) -> Value {
    let required_items: Vec<Value> = required
        .iter()
        .map(|(item, quantity)| json!({"name": item, "quantity": quantity}))
        .collect();
    json!({"type": "recipe", "name": name, "requiredItems": required_items})
}

/// A small kitchen with nested recipes:
///
/// Skibidi Spaghetti -> Meatball x3, Pasta x1, Tomato x2
/// Meatball -> Beef x2, Egg x1
/// Pasta -> Flour x3, Egg x1
#[allow(dead_code)]
pub fn spaghetti_catalog() -> Catalog {
    catalog_from(&[
        recipe("Skibidi Spaghetti", &[("Meatball", 3), ("Pasta", 1), ("Tomato", 2)]),
        recipe("Meatball", &[("Beef", 2), ("Egg", 1)]),
        recipe("Pasta", &[("Flour", 3), ("Egg", 1)]),
        ingredient("Beef", 5),
        ingredient("Egg", 3),
        ingredient("Flour", 0),
        ingredient("Tomato", 2),
    ])
}
