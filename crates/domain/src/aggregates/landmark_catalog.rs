//! LandmarkCatalog aggregate - The ordered, immutable set of hunt landmarks
//!
//! The catalog is built once at startup from a JSON document and never
//! mutated afterwards. Order in the source defines visitation order.
//!
//! # Source format
//!
//! ```json
//! {
//!   "geofencing": [
//!     {"id": "golden_gate_bridge", "hint": "...", "name": "...",
//!      "location": {"latitude": 37.819927, "longitude": -122.478256}}
//!   ]
//! }
//! ```
//!
//! A bare top-level array of entries is accepted as well.

use std::collections::HashSet;
use std::io::Read;

use serde_json::Value;

use crate::entities::Landmark;
use crate::error::CatalogError;

/// Top-level key holding the landmark list in a catalog document.
pub const CATALOG_ROOT_KEY: &str = "geofencing";

/// Ordered landmarks with unique ids.
///
/// # Invariants
///
/// - Landmark ids are unique
/// - Order matches the source exactly
///
/// # Example
///
/// ```
/// use treasurehunt_domain::LandmarkCatalog;
///
/// let catalog = LandmarkCatalog::load(r#"{"geofencing": [
///     {"id": "pier_39", "hint": "Sea lions bark here", "name": "Pier 39",
///      "location": {"latitude": 37.808674, "longitude": -122.409821}}
/// ]}"#).unwrap();
///
/// assert_eq!(catalog.size(), 1);
/// assert_eq!(catalog.at(0).unwrap().name(), "Pier 39");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkCatalog {
    landmarks: Vec<Landmark>,
}

impl LandmarkCatalog {
    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Malformed` if the document is not valid JSON of
    /// the expected shape, an entry is missing a field, a coordinate is out of
    /// range, or an id appears twice.
    pub fn load(source: &str) -> Result<Self, CatalogError> {
        let document: Value = serde_json::from_str(source)?;
        Self::from_document(document)
    }

    /// Parse a catalog from any reader (file, asset stream, ...).
    pub fn load_from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let document: Value = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Build a catalog from landmarks that were constructed in code.
    pub fn from_landmarks(landmarks: Vec<Landmark>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(landmarks.len());
        for landmark in &landmarks {
            if !seen.insert(landmark.id().as_str()) {
                return Err(CatalogError::malformed(format!(
                    "duplicate landmark id '{}'",
                    landmark.id()
                )));
            }
        }
        Ok(Self { landmarks })
    }

    fn from_document(document: Value) -> Result<Self, CatalogError> {
        let entries = match document {
            Value::Array(entries) => entries,
            Value::Object(mut root) => match root.remove(CATALOG_ROOT_KEY) {
                Some(Value::Array(entries)) => entries,
                Some(_) => {
                    return Err(CatalogError::malformed(format!(
                        "'{}' must be an array",
                        CATALOG_ROOT_KEY
                    )))
                }
                None => {
                    return Err(CatalogError::malformed(format!(
                        "missing '{}' array",
                        CATALOG_ROOT_KEY
                    )))
                }
            },
            _ => {
                return Err(CatalogError::malformed(
                    "catalog must be an object or an array",
                ))
            }
        };

        let landmarks = entries
            .into_iter()
            .enumerate()
            .map(|(position, entry)| {
                serde_json::from_value::<Landmark>(entry)
                    .map_err(|e| CatalogError::malformed(format!("landmark #{position}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_landmarks(landmarks)
    }

    /// Number of landmarks in the hunt.
    #[inline]
    pub fn size(&self) -> usize {
        self.landmarks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Landmark at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::IndexOutOfRange` if `index >= size()`.
    pub fn at(&self, index: usize) -> Result<&Landmark, CatalogError> {
        self.landmarks
            .get(index)
            .ok_or_else(|| CatalogError::index_out_of_range(index, self.size()))
    }

    /// Position of the landmark whose id matches a geofence request id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.landmarks.iter().position(|l| l.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }
}

impl<'a> IntoIterator for &'a LandmarkCatalog {
    type Item = &'a Landmark;
    type IntoIter = std::slice::Iter<'a, Landmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.landmarks.iter()
    }
}
