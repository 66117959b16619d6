// src/recipe/summary.rs

//! Depth-first expansion of a recipe into a flat ingredient summary
//!
//! Expansion walks the recipe's requirements depth-first, in list order.
//! Every ingredient reached is merged into one shared [`Summary`]:
//! its quantity is added to the entry of the same name (or appended on first
//! sight) and its cook time is added once per occurrence.
//!
//! Quantities do not compound across levels. A sub-recipe required twice is
//! expanded once per occurrence in the tree, and the quantity attached to the
//! sub-recipe itself is ignored.
//!
//! The walk tracks the chain of recipes currently being expanded. Reaching a
//! recipe already on that chain fails with [`Error::CyclicDependency`]; reaching
//! it again through a separate branch is allowed.

use super::{Catalog, Ingredient, Item, Recipe, RequiredItem, Summary};
use crate::error::{Error, Result};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Computes summaries against a catalog
///
/// Holds no state beyond the borrowed catalog, so resolving the same name
/// twice yields identical summaries.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
}

/// Recipes on the active expansion path
#[derive(Debug, Default)]
struct ActivePath<'a> {
    visiting: HashSet<&'a str>,
    chain: Vec<&'a str>,
}

impl<'a> ActivePath<'a> {
    fn enter(&mut self, name: &'a str) {
        self.visiting.insert(name);
        self.chain.push(name);
    }

    fn leave(&mut self, name: &'a str) {
        self.visiting.remove(name);
        self.chain.pop();
    }

    fn contains(&self, name: &str) -> bool {
        self.visiting.contains(name)
    }

    /// The chain from the first occurrence of `name` back to `name`
    fn cycle_through(&self, name: &str) -> Vec<String> {
        let start = self
            .chain
            .iter()
            .position(|entry| *entry == name)
            .unwrap_or(0);
        self.chain[start..]
            .iter()
            .map(|entry| entry.to_string())
            .chain(std::iter::once(name.to_string()))
            .collect()
    }
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Summarize the named recipe
    ///
    /// Fails with [`Error::NotFound`] for unknown names, [`Error::NotARecipe`]
    /// for ingredients, and with the first expansion failure otherwise. No
    /// partial summary is ever returned.
    pub fn summarize(&self, name: &str) -> Result<Summary> {
        let item = self
            .catalog
            .find(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        let recipe = item
            .as_recipe()
            .ok_or_else(|| Error::NotARecipe(name.to_string()))?;

        let mut summary = Summary::new(name);
        self.expand(recipe, &mut summary)
            .inspect_err(|e| warn!("Summary of '{}' failed: {}", name, e))?;

        debug!(
            "Summarized '{}': cook time {}, {} ingredient(s)",
            name,
            summary.cook_time,
            summary.required_ingredients.len()
        );
        Ok(summary)
    }

    /// Depth-first walk driven by an explicit frame stack
    ///
    /// Nesting depth is bounded by heap memory, not by the thread's stack.
    fn expand(&self, root: &'a Recipe, summary: &mut Summary) -> Result<()> {
        let mut path = ActivePath::default();
        let mut frames = vec![Frame::new(root)];
        path.enter(&root.name);

        while let Some(frame) = frames.last_mut() {
            let recipe = frame.recipe;
            let Some(required) = recipe.required_items.get(frame.next) else {
                path.leave(&recipe.name);
                frames.pop();
                continue;
            };
            frame.next += 1;

            let item = self.catalog.find(&required.name).ok_or_else(|| {
                Error::MissingDependency {
                    recipe: recipe.name.clone(),
                    dependency: required.name.clone(),
                }
            })?;

            match item {
                Item::Recipe(sub_recipe) => {
                    if path.contains(&sub_recipe.name) {
                        return Err(Error::CyclicDependency {
                            path: path.cycle_through(&sub_recipe.name),
                        });
                    }
                    debug!("Expanding '{}' required by '{}'", sub_recipe.name, recipe.name);
                    path.enter(&sub_recipe.name);
                    frames.push(Frame::new(sub_recipe));
                }
                Item::Ingredient(ingredient) => merge_ingredient(summary, required, ingredient),
            }
        }

        Ok(())
    }
}

/// A recipe being expanded and the index of its next requirement
#[derive(Debug)]
struct Frame<'a> {
    recipe: &'a Recipe,
    next: usize,
}

impl<'a> Frame<'a> {
    fn new(recipe: &'a Recipe) -> Self {
        Self { recipe, next: 0 }
    }
}

fn merge_ingredient(summary: &mut Summary, required: &RequiredItem, ingredient: &Ingredient) {
    match summary
        .required_ingredients
        .iter_mut()
        .find(|existing| existing.name == required.name)
    {
        Some(existing) => existing.quantity += required.quantity,
        None => summary
            .required_ingredients
            .push(RequiredItem::new(required.name.clone(), required.quantity)),
    }
    summary.cook_time = summary.cook_time.saturating_add(ingredient.cook_time);
}
