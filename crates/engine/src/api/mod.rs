//! Entry points that drive the hunt.

pub mod console;
