// src/metadata/model.rs
//! Read-only projections of module metadata.

use crate::visibility::Visibility;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A declared type: qualified name, visibility classification, and the
/// nested types and methods reported by the exporting facility.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub visibility: Visibility,
    #[serde(default)]
    methods: Vec<MethodDescriptor>,
    #[serde(default)]
    nested: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    /// Types declared directly inside this one.
    #[must_use]
    pub fn nested_types(&self) -> &[TypeDescriptor] {
        &self.nested
    }

    /// Instance and static methods, already flattened across the
    /// inheritance chain by the exporter. Constructors and other special
    /// members are excluded at export time.
    #[must_use]
    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }
}

/// A single method: name, return-type name, visibility, static flag.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub returns: String,
    pub visibility: Visibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

/// A declared type the exporter could not resolve, typically because a
/// dependency of the module was absent when the dump was produced.
#[derive(Debug, Clone, Deserialize)]
pub struct UnresolvedType {
    pub name: String,
    pub reason: String,
}

/// A successfully loaded module.
#[derive(Debug)]
pub struct ModuleHandle {
    name: String,
    path: PathBuf,
    types: Vec<TypeDescriptor>,
    unresolved: Vec<UnresolvedType>,
}

impl ModuleHandle {
    pub(crate) fn new(
        name: String,
        path: PathBuf,
        types: Vec<TypeDescriptor>,
        unresolved: Vec<UnresolvedType>,
    ) -> Self {
        Self { name, path, types, unresolved }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Top-level exported types, in module enumeration order.
    #[must_use]
    pub fn top_level_types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Types the exporter failed to resolve. Non-empty means the whole
    /// module must be skipped after reporting each cause.
    #[must_use]
    pub fn resolution_failures(&self) -> &[UnresolvedType] {
        &self.unresolved
    }
}
