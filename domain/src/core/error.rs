//! Domain error types

use thiserror::Error;

/// Errors raised by the command catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Unknown command name. Carries the full key set so the agent can recover.
    #[error("Tool '{name}' not found. Available tools: {}", available.join(", "))]
    NotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Duplicate command name in catalog: {0}")]
    DuplicateName(String),

    #[error("Catalog entry with empty name")]
    EmptyName,
}
