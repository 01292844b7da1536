//! Page-level components.

pub mod classifier;
