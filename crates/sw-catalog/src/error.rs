//! Catalog and pipeline error types.

use sw_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the catalog.
///
/// Every variant except [`CatalogError::Api`] is a transport failure; `Api`
/// means the catalog answered with an `errors` payload instead of data. The
/// pipeline treats both the same way and only logs the difference.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport error (connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog returned a non-success status code.
    #[error("HTTP status {status}: {message}")]
    Status {
        /// HTTP status code returned by the catalog.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The catalog returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// A well-formed GraphQL response carrying errors.
    #[error("GraphQL API error: {}", messages.join("; "))]
    Api {
        /// `message` of each reported error.
        messages: Vec<String>,
    },
}

impl CatalogError {
    /// `true` for an error payload from the API, `false` for transport failures.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

/// A remote record violated the fields the pipeline depends on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// A product arrived without a title.
    #[error("product at position {index} has no title (id: {})", id.as_deref().unwrap_or("unknown"))]
    MissingTitle { index: usize, id: Option<String> },

    /// A product arrived with a title that is not a string.
    #[error("product at position {index} has a non-text title (id: {})", id.as_deref().unwrap_or("unknown"))]
    InvalidTitle { index: usize, id: Option<String> },

    /// A threshold annotation is present but not an integer.
    #[error("product '{title}' has a non-integer threshold value '{value}'")]
    InvalidThreshold { title: String, value: String },
}

/// Failures that reach the caller of the pipeline.
///
/// Catalog failures never show up here: they degrade to an empty page.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Unknown category slug, or another registry error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The catalog returned a record that breaks the schema contract.
    #[error("normalization failed: {0}")]
    Normalize(#[from] NormalizeError),
}

impl ReconcileError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }))
    }
}
