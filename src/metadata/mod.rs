// src/metadata/mod.rs
//! The module-loading and reflection capability boundary.
//!
//! Everything the listing pipeline knows about a compiled module comes
//! through [`MetadataProvider`]: a handle exposing top-level types, nested
//! types, and per-member visibility flags. The one production backend reads
//! JSON reflection dumps (see [`json`]); parsing binary metadata directly is
//! out of scope, so a platform exporter produces the dumps.

pub mod json;
pub mod model;

pub use model::{MethodDescriptor, ModuleHandle, TypeDescriptor, UnresolvedType};

use crate::error::Result;
use std::path::Path;

/// A source of loadable module metadata.
pub trait MetadataProvider {
    /// Loads the module at `path` into a queryable handle.
    ///
    /// # Errors
    /// Returns `ScopeError::ModuleRead` when the path cannot be read and
    /// `ScopeError::ModuleFormat` when it is not a valid metadata document.
    /// Both are per-path failures; callers continue with remaining paths.
    fn load(&self, path: &Path) -> Result<ModuleHandle>;
}
