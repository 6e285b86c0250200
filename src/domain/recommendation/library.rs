//! Recommendation library - the injected, read-only variant registry.
//!
//! Modeled as a value passed into the matcher rather than a module-level
//! constant so tests can substitute small fixture libraries.

use super::content::BUILTIN_VARIANTS;
use super::variant::RecommendationVariant;

/// Read-only registry of recommendation variants.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationLibrary {
    variants: &'static [RecommendationVariant],
}

/// Constructs whose advice is shared with a richer neighbor construct.
///
/// The curated content covers the highest-leverage constructs; closely
/// related ones borrow that list rather than shipping near-duplicates.
const CONSTRUCT_ALIASES: &[(&str, &str)] = &[
    ("practitionerRelationships", "practitionerAccess"),
    ("learningFromSetbacks", "adaptiveResponse"),
    ("recoverySpeed", "adaptiveResponse"),
    ("postShockStrength", "adaptiveResponse"),
    ("communityOwnership", "communityDecisionMaking"),
    ("revenueRetention", "financialReserves"),
];

impl RecommendationLibrary {
    /// The full curated library shipped with the service.
    pub fn builtin() -> Self {
        Self {
            variants: BUILTIN_VARIANTS,
        }
    }

    /// Builds a library over an explicit variant set (fixtures in tests).
    pub fn new(variants: &'static [RecommendationVariant]) -> Self {
        Self { variants }
    }

    /// Resolves advice aliasing for a construct id.
    fn canonical(construct: &str) -> &str {
        CONSTRUCT_ALIASES
            .iter()
            .find(|(from, _)| *from == construct)
            .map(|(_, to)| *to)
            .unwrap_or(construct)
    }

    /// Candidate variants for a construct, in declaration order.
    ///
    /// The yielded index is the declaration position, used as the final
    /// tie-break (earlier wins).
    pub fn variants_for(
        &self,
        construct: &str,
    ) -> impl Iterator<Item = (usize, &'static RecommendationVariant)> {
        let canonical = Self::canonical(construct).to_string();
        self.variants
            .iter()
            .filter(move |v| v.context.construct == canonical)
            .enumerate()
    }

    /// The explicit context-free default variant for a construct, if any.
    pub fn default_for(&self, construct: &str) -> Option<&'static RecommendationVariant> {
        self.variants_for(construct)
            .map(|(_, v)| v)
            .find(|v| v.is_generic())
    }

    /// Total number of variants in the registry.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_library_is_populated() {
        let lib = RecommendationLibrary::builtin();
        assert!(lib.len() >= 30);
    }

    #[test]
    fn builtin_variant_ids_are_unique() {
        let lib = RecommendationLibrary::builtin();
        let mut seen = HashSet::new();
        for v in lib.variants {
            assert!(seen.insert(v.id), "duplicate variant id {}", v.id);
        }
    }

    #[test]
    fn every_covered_construct_has_exactly_one_generic_default() {
        let lib = RecommendationLibrary::builtin();
        let constructs: HashSet<&str> = lib.variants.iter().map(|v| v.context.construct).collect();

        for construct in constructs {
            let generics = lib
                .variants_for(construct)
                .filter(|(_, v)| v.is_generic())
                .count();
            assert_eq!(generics, 1, "construct {} has {} generic variants", construct, generics);
        }
    }

    #[test]
    fn aliased_constructs_resolve_to_shared_variants() {
        let lib = RecommendationLibrary::builtin();

        let direct: Vec<&str> = lib.variants_for("adaptiveResponse").map(|(_, v)| v.id).collect();
        let aliased: Vec<&str> = lib.variants_for("recoverySpeed").map(|(_, v)| v.id).collect();
        assert_eq!(direct, aliased);
        assert!(!direct.is_empty());
    }

    #[test]
    fn uncovered_construct_yields_no_variants() {
        let lib = RecommendationLibrary::builtin();
        assert_eq!(lib.variants_for("jobCreation").count(), 0);
        assert!(lib.default_for("jobCreation").is_none());
    }
}
