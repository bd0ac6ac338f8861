// src/visibility.rs
//! Visibility tiers and the inclusion policy applied to types and methods.

use serde::Deserialize;

/// The threshold requested on the command line. Higher tiers include
/// everything the lower tiers admit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Public,
    Protected,
    Private,
}

impl Tier {
    /// Parses the first CLI token. Case-insensitive; `None` means the token
    /// was not a tier name and should be treated as a module path.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "public" => Some(Tier::Public),
            "protected" => Some(Tier::Protected),
            "private" => Some(Tier::Private),
            _ => None,
        }
    }

    /// Decides whether a member with the given visibility is included at
    /// this tier. Assembly-scoped members are never included: internal
    /// details are not part of any supported member listing.
    #[must_use]
    pub fn admits(self, vis: Visibility) -> bool {
        match vis {
            Visibility::Public => true,
            Visibility::Family => self >= Tier::Protected,
            Visibility::Private => self >= Tier::Private,
            Visibility::Assembly => false,
        }
    }
}

/// Four-way member classification as reported by the metadata facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    /// Visible to the declaring type and its subtypes.
    #[serde(alias = "protected")]
    Family,
    /// Visible only inside the declaring module.
    #[serde(alias = "internal")]
    Assembly,
    Private,
}

impl Visibility {
    /// The keyword printed on method lines.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Family => "protected",
            Visibility::Assembly => "internal",
            Visibility::Private => "private",
        }
    }

    /// The coarse two-way tag printed on type lines.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            _ => "non-public",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: [Tier; 3] = [Tier::Public, Tier::Protected, Tier::Private];

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Tier::parse("public"), Some(Tier::Public));
        assert_eq!(Tier::parse("Protected"), Some(Tier::Protected));
        assert_eq!(Tier::parse("PRIVATE"), Some(Tier::Private));
        assert_eq!(Tier::parse("internal"), None);
        assert_eq!(Tier::parse("lib.json"), None);
    }

    #[test]
    fn test_public_admitted_everywhere() {
        for tier in TIERS {
            assert!(tier.admits(Visibility::Public));
        }
    }

    #[test]
    fn test_family_needs_protected() {
        assert!(!Tier::Public.admits(Visibility::Family));
        assert!(Tier::Protected.admits(Visibility::Family));
        assert!(Tier::Private.admits(Visibility::Family));
    }

    #[test]
    fn test_private_needs_private() {
        assert!(!Tier::Public.admits(Visibility::Private));
        assert!(!Tier::Protected.admits(Visibility::Private));
        assert!(Tier::Private.admits(Visibility::Private));
    }

    #[test]
    fn test_assembly_never_admitted() {
        for tier in TIERS {
            assert!(!tier.admits(Visibility::Assembly));
        }
    }

    #[test]
    fn test_admits_is_monotonic() {
        let members = [
            Visibility::Public,
            Visibility::Family,
            Visibility::Assembly,
            Visibility::Private,
        ];
        for vis in members {
            if Tier::Public.admits(vis) {
                assert!(Tier::Protected.admits(vis));
            }
            if Tier::Protected.admits(vis) {
                assert!(Tier::Private.admits(vis));
            }
        }
    }
}
