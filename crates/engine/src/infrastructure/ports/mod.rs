//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Geofence registration (platform location services, or the simulator)
//! - Permission / device location checks
//! - Clock (for testing)

mod error;
mod external;
mod testing;

pub use error::GeofenceError;
pub use external::{GeofenceTransitionEvent, GeofencingPort, LocationAccessPort};
pub use testing::ClockPort;

#[cfg(test)]
pub use external::{MockGeofencingPort, MockLocationAccessPort};
#[cfg(test)]
pub use testing::MockClockPort;
