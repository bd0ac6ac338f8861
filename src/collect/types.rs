// src/collect/types.rs
use crate::metadata::{ModuleHandle, TypeDescriptor};
use crate::visibility::Tier;

/// Flattens a module's type surface under the tier policy.
///
/// Top-level types come first, in module enumeration order, followed by
/// every nested type discovered by a depth-first walk of the survivors.
/// A nested type that fails the policy is neither listed nor walked, so
/// its own nested types stay hidden with it. Nested-type graphs cannot
/// cycle, so the recursion needs no depth bound.
#[must_use]
pub fn collect_types(module: &ModuleHandle, tier: Tier) -> Vec<&TypeDescriptor> {
    let top: Vec<&TypeDescriptor> = module
        .top_level_types()
        .iter()
        .filter(|ty| tier.admits(ty.visibility))
        .collect();

    let mut flat = top.clone();
    for ty in &top {
        push_nested(ty, tier, &mut flat);
    }
    flat
}

fn push_nested<'a>(ty: &'a TypeDescriptor, tier: Tier, out: &mut Vec<&'a TypeDescriptor>) {
    for nested in ty.nested_types() {
        if tier.admits(nested.visibility) {
            out.push(nested);
            push_nested(nested, tier, out);
        }
    }
}
