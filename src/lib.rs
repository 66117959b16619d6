// src/lib.rs

//! Cookbook
//!
//! In-memory catalog of ingredients and recipes with recursive summary
//! resolution.
//!
//! # Architecture
//!
//! - Catalog: insertion-ordered items with unique names, validated on entry
//! - Resolver: expands a recipe's requirement graph into total cook time and
//!   merged ingredient quantities
//! - Server: HTTP front end over a single locked catalog (feature `server`)

mod error;
pub mod name;
pub mod recipe;

#[cfg(feature = "server")]
pub mod server;

pub use error::{Error, Result};
pub use name::parse_handwriting;
pub use recipe::{
    parse_entry, Catalog, Ingredient, Item, ItemKind, Recipe, RequiredItem, Resolver, Summary,
};
