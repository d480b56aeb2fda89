//! Cross-cutting error types for Stockwatch.
//!
//! Transport and normalization errors live in `sw-catalog`, configuration
//! errors in `sw-config`. The binary converges all of them through `anyhow`.

use thiserror::Error;

/// Errors raised by the registry and other core types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, uniqueness, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for an unknown category slug.
    #[must_use]
    pub fn category_not_found(slug: &str) -> Self {
        Self::NotFound {
            entity_type: "category".to_string(),
            id: slug.to_string(),
        }
    }
}
