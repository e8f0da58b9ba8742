//! Domain entities - Core business objects with identity

mod landmark;

pub use landmark::Landmark;
