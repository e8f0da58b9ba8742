//! Landmark entity - One stop in the treasure hunt
//!
//! A landmark carries a clue shown before the user arrives (`hint`) and the
//! text revealed once they are inside its geofence (`name`).

use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinate, LandmarkId};

/// A single landmark, as read from the catalog document.
///
/// The catalog stores the coordinate under a nested `location` object:
///
/// ```json
/// {"id": "pier_39", "hint": "...", "name": "...",
///  "location": {"latitude": 37.808674, "longitude": -122.409821}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    id: LandmarkId,
    hint: String,
    name: String,
    #[serde(rename = "location")]
    coordinate: Coordinate,
}

impl Landmark {
    pub fn new(
        id: LandmarkId,
        hint: impl Into<String>,
        name: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id,
            hint: hint.into(),
            name: name.into(),
            coordinate,
        }
    }

    #[inline]
    pub fn id(&self) -> &LandmarkId {
        &self.id
    }

    /// Clue text shown before arrival.
    #[inline]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Reveal text shown after arrival.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}
