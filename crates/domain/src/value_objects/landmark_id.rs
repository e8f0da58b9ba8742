//! Validated landmark identifier
//!
//! Landmark ids double as geofence request ids, so they must be stable across
//! runs and non-empty. Whitespace is trimmed on construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Maximum length for a landmark id
const MAX_ID_LENGTH: usize = 100;

/// A validated landmark id (non-empty, <=100 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LandmarkId(String);

impl LandmarkId {
    /// Create a new validated landmark id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Malformed` if:
    /// - The id is empty after trimming
    /// - The id exceeds 100 characters after trimming
    pub fn new(id: impl Into<String>) -> Result<Self, CatalogError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::malformed("Landmark id cannot be empty"));
        }
        if trimmed.len() > MAX_ID_LENGTH {
            return Err(CatalogError::malformed(format!(
                "Landmark id cannot exceed {} characters",
                MAX_ID_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LandmarkId {
    type Error = CatalogError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<LandmarkId> for String {
    fn from(id: LandmarkId) -> String {
        id.0
    }
}

impl PartialEq<str> for LandmarkId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
