//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level error.
///
/// The catalog has no I/O, parsing, or resource-exhaustion failure class;
/// these two conditions are the whole taxonomy. Lookup misses that callers
/// are expected to tolerate are reported as `Option::None` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A category with the same case-insensitive name is already registered.
    #[error("category '{0}' already exists")]
    DuplicateCategory(String),

    /// A requested entity was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl CatalogError {
    pub fn duplicate_category(name: impl Into<String>) -> Self {
        Self::DuplicateCategory(name.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
