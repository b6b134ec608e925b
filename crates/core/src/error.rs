//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level error.
///
/// Queries never fail; this covers the explicit integrity surface only
/// (identifier parsing and catalog validation).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A record failed validation (e.g. empty image list).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty string).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Two records share the same identifier.
    #[error("duplicate product id: {0}")]
    DuplicateId(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }
}
