//! Error types for the domain layer
//!
//! Catalog loading and lookups share a single error type so the engine can
//! surface a malformed catalog and a bad index through the same channel.
//! `HuntComplete` is deliberately separate: it is the terminal signal of
//! [`HuntProgress::advance`](crate::aggregates::HuntProgress::advance), not a
//! failure.

use thiserror::Error;

/// Errors raised while loading or reading a landmark catalog.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// The source failed schema, range or uniqueness validation.
    #[error("Malformed catalog: {0}")]
    Malformed(String),

    /// A landmark index outside `[0, size)` was requested.
    #[error("Landmark index {index} out of range (catalog has {size} landmarks)")]
    IndexOutOfRange { index: usize, size: usize },

    /// The catalog source could not be read.
    #[error("Failed to read catalog: {0}")]
    Io(String),
}

impl CatalogError {
    /// Creates a malformed catalog error.
    ///
    /// Use this for any validation failure of the source document:
    /// - Missing or mistyped fields
    /// - Coordinates outside the valid latitude/longitude range
    /// - Duplicate landmark ids
    ///
    /// # Example
    /// ```ignore
    /// if seen.contains(&id) {
    ///     return Err(CatalogError::malformed(format!("duplicate landmark id '{}'", id)));
    /// }
    /// ```
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    /// Create an I/O error
    pub fn io(msg: impl ToString) -> Self {
        Self::Io(msg.to_string())
    }

    /// Check if this is a validation failure of the source.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.to_string())
        } else {
            Self::Malformed(err.to_string())
        }
    }
}

/// Every landmark in the catalog has been visited.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Hunt complete: no landmarks left to visit")]
pub struct HuntComplete;
