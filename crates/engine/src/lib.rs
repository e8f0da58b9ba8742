//! Treasure hunt engine library.
//!
//! Drives a sequential landmark hunt: one geofence is registered at a time,
//! and entering it reveals the next clue.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration over the tracker and the ports
//! - `stores/` - In-memory session state
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Console entry point
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Test fixtures module for integration testing.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end hunts against the simulated adapters.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
