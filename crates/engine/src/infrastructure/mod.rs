//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod catalog_source;
pub mod clock;
pub mod location_access;
pub mod ports;
pub mod settings;
pub mod simulated_geofencing;
