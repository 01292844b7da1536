//! Imperative DOM layer for the server-HTML fragment regions.

pub mod fragments;
