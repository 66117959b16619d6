// src/recipe/catalog.rs

//! Insertion-ordered store of uniquely named items

use super::entry::parse_entry;
use super::Item;
use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{info, warn};

/// The registry of all known items
///
/// Ingredients and recipes share one namespace. Items are immutable once
/// registered; there is no update or removal.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Items in registration order
    items: Vec<Item>,
    /// Name -> position in `items`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already-built item
    ///
    /// Fails with [`Error::InvalidItem`] if the name is empty or already taken.
    /// Recipes may name requirements that are not registered yet.
    pub fn register(&mut self, item: Item) -> Result<()> {
        let name = item.name();
        if name.is_empty() {
            warn!("Rejected {}: name must not be empty", item.kind());
            return Err(Error::InvalidItem("name must not be empty".to_string()));
        }
        if self.index.contains_key(name) {
            warn!("Rejected {} '{}': name already registered", item.kind(), name);
            return Err(Error::InvalidItem(format!(
                "an item named '{}' already exists",
                name
            )));
        }

        info!("Registered {} '{}'", item.kind(), name);
        self.index.insert(name.to_string(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Validate a raw JSON payload and register the resulting item
    pub fn register_json(&mut self, value: &Value) -> Result<()> {
        let item = parse_entry(value).inspect_err(|e| warn!("Rejected entry: {}", e))?;
        self.register(item)
    }

    /// Look up an item by exact, case-sensitive name
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.index.get(name).map(|&position| &self.items[position])
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
