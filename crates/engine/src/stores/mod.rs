//! In-memory state storage modules.
//!
//! Stores manage runtime state that lives only for the session:
//! - `HuntSessionStore` - Hunt progress tracker behind a single-mutator lock

pub mod hunt_session;

pub use hunt_session::HuntSessionStore;
