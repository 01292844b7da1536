//! Network layer: REST helpers for the classification server.

pub mod api;
