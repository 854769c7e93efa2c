//! Configuration types
//!
//! Board-agnostic configuration structures. Values are fixed at startup
//! by the firmware's board module; nothing here is persisted.

pub mod types;

pub use types::*;
