//! Static registry of package-type definitions.
//!
//! One [`TypeDefinition`] record per ecosystem declares the namespace
//! requirement, the allowed qualifier keys, the case-sensitivity flags and
//! which extra validation rules apply. Adding an ecosystem means adding a
//! table entry; the parser, serializer and normalizer are untouched.

mod types;

pub use types::TYPE_DEFINITIONS;

/// Whether an ecosystem requires, allows or prohibits a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceRequirement {
    Required,
    Optional,
    Prohibited,
}

/// Tag selecting the extra, type-specific validation rules to run on top
/// of the generic checks. Dispatched in `validate`; rules only append
/// messages, they never replace the generic checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraRules {
    /// No rules beyond the generic checks.
    None,
    /// CPAN distribution vs module naming: `::` is only legal in a bare
    /// module name, `-` only in a namespaced distribution name.
    Cpan,
    /// Ecosystems whose convention is dashes, where an underscore in the
    /// name is almost always a mistake (pypi, hackage).
    UnderscoreInName,
    /// Dart/Flutter pub package naming: lowercase letters, digits and
    /// underscores only.
    Pub,
}

/// Definition record for one package type.
#[derive(Debug, Clone, Copy)]
pub struct TypeDefinition {
    /// The lowercase type key, e.g. `npm`.
    pub ptype: &'static str,
    /// Human-readable ecosystem name.
    pub name: &'static str,
    /// Short description of what the type covers.
    pub description: &'static str,
    /// True if the ecosystem has a public package repository.
    pub use_repository: bool,
    /// Default repository URL, empty when there is no canonical one.
    pub default_repository_url: &'static str,
    pub namespace_requirement: NamespaceRequirement,
    /// Qualifier keys this type recognizes.
    pub allowed_qualifiers: &'static [&'static str],
    /// False means the canonical namespace form is lowercase.
    pub namespace_case_sensitive: bool,
    /// False means the canonical name form is lowercase.
    pub name_case_sensitive: bool,
    /// False means the canonical version form is lowercase.
    pub version_case_sensitive: bool,
    pub extra_rules: ExtraRules,
}

impl TypeDefinition {
    /// True if `key` is in this type's allowed qualifier set.
    #[must_use]
    pub fn allows_qualifier(&self, key: &str) -> bool {
        self.allowed_qualifiers.contains(&key)
    }
}

/// Look up the definition for a type key. Returns `None` for unknown types.
#[must_use]
pub fn definition_for(ptype: &str) -> Option<&'static TypeDefinition> {
    TYPE_DEFINITIONS
        .binary_search_by(|def| def.ptype.cmp(ptype))
        .ok()
        .map(|idx| &TYPE_DEFINITIONS[idx])
}

/// All registered type keys, in sorted order.
pub fn known_types() -> impl Iterator<Item = &'static str> {
    TYPE_DEFINITIONS.iter().map(|def| def.ptype)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        // Lookup is a binary search, so the table must stay sorted.
        for pair in TYPE_DEFINITIONS.windows(2) {
            assert!(
                pair[0].ptype < pair[1].ptype,
                "registry out of order: {} >= {}",
                pair[0].ptype,
                pair[1].ptype
            );
        }
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let npm = definition_for("npm").unwrap();
        assert_eq!(npm.name, "npm");
        assert_eq!(npm.namespace_requirement, NamespaceRequirement::Optional);

        assert!(definition_for("not-a-real-type").is_none());
        assert!(definition_for("NPM").is_none());
    }

    #[test]
    fn test_allows_qualifier() {
        let maven = definition_for("maven").unwrap();
        assert!(maven.allows_qualifier("classifier"));
        assert!(!maven.allows_qualifier("arch"));
    }

    #[test]
    fn test_flags_match_ecosystem_conventions() {
        let maven = definition_for("maven").unwrap();
        assert!(maven.namespace_case_sensitive);
        assert!(maven.name_case_sensitive);

        let pypi = definition_for("pypi").unwrap();
        assert_eq!(
            pypi.namespace_requirement,
            NamespaceRequirement::Prohibited
        );
        assert!(!pypi.name_case_sensitive);
        assert_eq!(pypi.extra_rules, ExtraRules::UnderscoreInName);

        let cpan = definition_for("cpan").unwrap();
        assert_eq!(cpan.extra_rules, ExtraRules::Cpan);
    }

    #[test]
    fn test_known_types_count() {
        assert_eq!(known_types().count(), TYPE_DEFINITIONS.len());
        assert!(known_types().count() >= 30);
    }
}
