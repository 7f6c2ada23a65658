//! Abstraction of the module inputs.

pub mod button;
pub mod snapshot;
pub mod store;
