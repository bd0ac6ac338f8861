// src/collect/mod.rs
//! Policy-filtered traversal of loaded module metadata.

pub mod methods;
pub mod types;

pub use methods::collect_methods;
pub use types::collect_types;
