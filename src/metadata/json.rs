// src/metadata/json.rs
//! JSON reflection-dump backend.
//!
//! One document per module:
//!
//! ```json
//! {
//!   "module": "acme.corelib",
//!   "types": [
//!     {
//!       "name": "Acme.Widget",
//!       "visibility": "public",
//!       "methods": [
//!         { "name": "Run", "returns": "Void", "visibility": "public" }
//!       ],
//!       "nested": []
//!     }
//!   ],
//!   "unresolved": []
//! }
//! ```
//!
//! `module`, `methods`, `nested`, `unresolved`, and `static` are optional;
//! `module` defaults to the file stem. Method lists are pre-flattened across
//! the inheritance chain by the exporter.

use crate::error::{Result, ScopeError};
use crate::metadata::model::{ModuleHandle, TypeDescriptor, UnresolvedType};
use crate::metadata::MetadataProvider;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct ModuleDoc {
    #[serde(default)]
    module: Option<String>,
    #[serde(default)]
    types: Vec<TypeDescriptor>,
    #[serde(default)]
    unresolved: Vec<UnresolvedType>,
}

/// Loads module metadata from JSON reflection dumps on disk.
#[derive(Debug, Default)]
pub struct JsonProvider;

impl JsonProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetadataProvider for JsonProvider {
    fn load(&self, path: &Path) -> Result<ModuleHandle> {
        let resolved = resolve(path);
        let raw = fs::read_to_string(&resolved).map_err(|source| ScopeError::ModuleRead {
            path: resolved.clone(),
            source,
        })?;
        let doc: ModuleDoc =
            serde_json::from_str(&raw).map_err(|source| ScopeError::ModuleFormat {
                path: resolved.clone(),
                source,
            })?;

        let name = doc.module.unwrap_or_else(|| stem_of(&resolved));
        Ok(ModuleHandle::new(name, resolved, doc.types, doc.unresolved))
    }
}

/// Falls back to the current working directory when the literal path does
/// not exist. The subsequent read reports the error either way.
fn resolve(path: &Path) -> PathBuf {
    if path.exists() || path.is_absolute() {
        return path.to_path_buf();
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned())
}
