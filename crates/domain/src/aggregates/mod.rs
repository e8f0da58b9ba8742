//! Aggregates - Consistency boundaries for the hunt
//!
//! - `LandmarkCatalog`: immutable, ordered landmarks with unique ids
//! - `HuntProgress`: the single-mutator state machine over catalog indices

pub mod hunt_progress;
pub mod landmark_catalog;

pub use hunt_progress::{HuntProgress, HuntState};
pub use landmark_catalog::{LandmarkCatalog, CATALOG_ROOT_KEY};
