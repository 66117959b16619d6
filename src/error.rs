// src/error.rs

//! Error types for catalog registration and recipe resolution

use thiserror::Error;

/// Errors produced by the cookbook library
///
/// Every variant describes a single rejected request. None of them leave the
/// catalog in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A registration payload failed validation or reused an existing name
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// The requested name is not registered
    #[error("Item not found: {0}")]
    NotFound(String),

    /// A summary was requested for an ingredient
    #[error("Not a recipe: {0}")]
    NotARecipe(String),

    /// A recipe references a name that is not registered
    #[error("Recipe '{recipe}' requires missing item '{dependency}'")]
    MissingDependency { recipe: String, dependency: String },

    /// A recipe transitively requires itself
    #[error("Circular recipe dependency: {}", path.join(" -> "))]
    CyclicDependency { path: Vec<String> },

    /// Name normalization left nothing usable
    #[error("Invalid name: {0:?}")]
    InvalidName(String),
}

impl Error {
    /// Short machine-readable identifier, used in HTTP error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidItem(_) => "invalid_item",
            Self::NotFound(_) => "not_found",
            Self::NotARecipe(_) => "not_a_recipe",
            Self::MissingDependency { .. } => "missing_dependency",
            Self::CyclicDependency { .. } => "cyclic_dependency",
            Self::InvalidName(_) => "invalid_name",
        }
    }
}

/// Result type for cookbook operations
pub type Result<T> = std::result::Result<T, Error>;
