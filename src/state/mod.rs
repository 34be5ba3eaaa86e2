//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`catalog`, `ui`) so individual components can
//! depend on small focused models. Each state struct is provided to the
//! view tree as an `RwSignal` context from the root component.

pub mod catalog;
pub mod ui;
