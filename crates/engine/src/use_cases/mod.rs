//! Use cases - User story orchestration.
//!
//! Use cases orchestrate the tracker, the catalog and the ports to fulfill
//! user stories.

pub mod hunt;

pub use hunt::HuntUseCases;
