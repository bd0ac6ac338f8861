// src/collect/methods.rs
use crate::metadata::{MethodDescriptor, TypeDescriptor};
use crate::visibility::Tier;
use std::collections::HashSet;

/// Filters and deduplicates one type's methods under the tier policy.
///
/// The input listing is already flattened across the inheritance chain and
/// carries instance and static methods only. Two methods collide when their
/// (name, return-type name) pair matches; the first occurrence in
/// enumeration order wins, so overloads sharing a return type collapse to a
/// single entry. An empty result means the type is omitted from the report.
#[must_use]
pub fn collect_methods(ty: &TypeDescriptor, tier: Tier) -> Vec<&MethodDescriptor> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    ty.methods()
        .iter()
        .filter(|m| tier.admits(m.visibility))
        .filter(|m| seen.insert((m.name.as_str(), m.returns.as_str())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(json: &str) -> TypeDescriptor {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_overloads_collapse_on_name_and_return() {
        let t = ty(
            r#"{"name": "Calc", "visibility": "public", "methods": [
                {"name": "Foo", "returns": "int", "visibility": "public"},
                {"name": "Foo", "returns": "int", "visibility": "public", "static": true},
                {"name": "Foo", "returns": "long", "visibility": "public"}
            ]}"#,
        );
        let kept = collect_methods(&t, Tier::Public);
        let pairs: Vec<(&str, &str)> = kept
            .iter()
            .map(|m| (m.name.as_str(), m.returns.as_str()))
            .collect();
        assert_eq!(pairs, [("Foo", "int"), ("Foo", "long")]);
        // First occurrence wins, so the instance flavor survives.
        assert!(!kept[0].is_static);
    }

    #[test]
    fn test_policy_applied_before_dedup() {
        // The assembly-scoped Foo comes first but never qualifies, so the
        // public Foo must still be listed.
        let t = ty(
            r#"{"name": "Calc", "visibility": "public", "methods": [
                {"name": "Foo", "returns": "int", "visibility": "assembly"},
                {"name": "Foo", "returns": "int", "visibility": "public"}
            ]}"#,
        );
        let kept = collect_methods(&t, Tier::Public);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].visibility.keyword(), "public");
    }

    #[test]
    fn test_assembly_methods_never_listed() {
        let t = ty(
            r#"{"name": "Sealed", "visibility": "public", "methods": [
                {"name": "Hidden", "returns": "Void", "visibility": "assembly"}
            ]}"#,
        );
        for tier in [Tier::Public, Tier::Protected, Tier::Private] {
            assert!(collect_methods(&t, tier).is_empty());
        }
    }

    #[test]
    fn test_tier_widens_method_set() {
        let t = ty(
            r#"{"name": "Calc", "visibility": "public", "methods": [
                {"name": "Pub", "returns": "Void", "visibility": "public"},
                {"name": "Fam", "returns": "Void", "visibility": "family"},
                {"name": "Sec", "returns": "Void", "visibility": "private"}
            ]}"#,
        );
        assert_eq!(collect_methods(&t, Tier::Public).len(), 1);
        assert_eq!(collect_methods(&t, Tier::Protected).len(), 2);
        assert_eq!(collect_methods(&t, Tier::Private).len(), 3);
    }
}
