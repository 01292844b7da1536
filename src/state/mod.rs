//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`form`, `toast`) so individual components can
//! depend on small focused models. The structs are plain data; components
//! wrap them in `RwSignal`s.

pub mod form;
pub mod toast;
