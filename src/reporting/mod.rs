// src/reporting/mod.rs
//! Report assembly and rendering.
//!
//! A [`Report`] is built first — module groups holding type groups holding
//! method lines, with empty groups dropped — and rendered afterwards. The
//! drop-before-render rule is what keeps headers lazy: a module whose whole
//! surface filtered away never prints a header at all.

pub mod console;
pub mod json;

use crate::collect;
use crate::metadata::{MethodDescriptor, ModuleHandle};
use crate::visibility::Tier;
use serde::Serialize;

/// The final output artifact: ordered module groups.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub modules: Vec<ModuleReport>,
}

impl Report {
    /// Returns true when nothing survived filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// One module's surviving types, in collection order.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleReport {
    pub module: String,
    pub types: Vec<TypeReport>,
}

/// One type's surviving methods plus the coarse visibility tag shown on
/// its line ("public" or "non-public").
#[derive(Debug, Clone, Serialize)]
pub struct TypeReport {
    pub name: String,
    pub tag: &'static str,
    pub methods: Vec<MethodLine>,
}

/// One rendered method entry.
#[derive(Debug, Clone, Serialize)]
pub struct MethodLine {
    pub is_static: bool,
    pub visibility: &'static str,
    pub name: String,
    pub returns: String,
}

impl From<&MethodDescriptor> for MethodLine {
    fn from(m: &MethodDescriptor) -> Self {
        Self {
            is_static: m.is_static,
            visibility: m.visibility.keyword(),
            name: m.name.clone(),
            returns: m.returns.clone(),
        }
    }
}

/// Builds the report group for one module. Types with zero surviving
/// methods are traversed (their nested types can still qualify) but not
/// listed; `None` means the module filtered down to nothing and gets no
/// header.
#[must_use]
pub fn module_report(module: &ModuleHandle, tier: Tier) -> Option<ModuleReport> {
    let mut types = Vec::new();
    for ty in collect::collect_types(module, tier) {
        let methods = collect::collect_methods(ty, tier);
        if methods.is_empty() {
            continue;
        }
        types.push(TypeReport {
            name: ty.name.clone(),
            tag: ty.visibility.tag(),
            methods: methods.into_iter().map(MethodLine::from).collect(),
        });
    }

    if types.is_empty() {
        None
    } else {
        Some(ModuleReport {
            module: module.name().to_string(),
            types,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{TypeDescriptor, UnresolvedType};
    use std::path::PathBuf;

    fn module(types_json: &str) -> ModuleHandle {
        let types: Vec<TypeDescriptor> = serde_json::from_str(types_json).unwrap();
        ModuleHandle::new(
            "fixture".to_string(),
            PathBuf::from("fixture.json"),
            types,
            Vec::<UnresolvedType>::new(),
        )
    }

    #[test]
    fn test_type_without_methods_dropped_but_traversed() {
        // The outer type has no qualifying methods; its nested type does
        // and must still be listed.
        let m = module(
            r#"[
                {"name": "Outer", "visibility": "public",
                 "nested": [
                    {"name": "Outer.Inner", "visibility": "public",
                     "methods": [{"name": "Go", "returns": "Void", "visibility": "public"}]}
                 ]}
            ]"#,
        );
        let group = module_report(&m, Tier::Public).unwrap();
        let names: Vec<&str> = group.types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Outer.Inner"]);
    }

    #[test]
    fn test_module_with_nothing_surviving_yields_none() {
        let m = module(
            r#"[
                {"name": "Quiet", "visibility": "public",
                 "methods": [{"name": "Hidden", "returns": "Void", "visibility": "assembly"}]}
            ]"#,
        );
        for tier in [Tier::Public, Tier::Protected, Tier::Private] {
            assert!(module_report(&m, tier).is_none());
        }
    }

    #[test]
    fn test_non_public_tag_on_family_types() {
        let m = module(
            r#"[
                {"name": "Fam", "visibility": "family",
                 "methods": [{"name": "Go", "returns": "Void", "visibility": "public"}]}
            ]"#,
        );
        let group = module_report(&m, Tier::Protected).unwrap();
        assert_eq!(group.types[0].tag, "non-public");
    }
}
