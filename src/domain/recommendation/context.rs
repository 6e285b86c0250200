//! Context matching - scoring a variant's audience against a profile.
//!
//! Matching is driven by a declarative weight table consumed by one
//! generic scorer, so adding a context dimension means adding a table
//! row, not another branch.

use crate::domain::profile::{BusinessStage, Demographics, Industry, OrganizationType, Region, TeamSize};

/// The audience a recommendation variant is written for.
///
/// An empty field list means "matches anything" on that dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationContext {
    /// Construct this variant addresses.
    pub construct: &'static str,
    pub org_types: &'static [OrganizationType],
    pub industries: &'static [Industry],
    pub business_stages: &'static [BusinessStage],
    pub team_sizes: &'static [TeamSize],
    pub regions: &'static [Region],
}

impl RecommendationContext {
    /// Context constrained on nothing: the generic fallback shape.
    pub const fn generic(construct: &'static str) -> Self {
        Self {
            construct,
            org_types: &[],
            industries: &[],
            business_stages: &[],
            team_sizes: &[],
            regions: &[],
        }
    }

    /// True when no dimension carries a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.org_types.is_empty()
            && self.industries.is_empty()
            && self.business_stages.is_empty()
            && self.team_sizes.is_empty()
            && self.regions.is_empty()
    }
}

/// Baseline score for a variant with no context constraints, keeping
/// generic fallbacks selectable.
pub const GENERIC_BASELINE_SCORE: u32 = 10;

/// One row of the match weight table.
struct ContextField {
    points: u32,
    constrained: fn(&RecommendationContext) -> bool,
    matches: fn(&RecommendationContext, &Demographics) -> bool,
}

/// Field -> points. Unmatched dimensions contribute 0, never negative.
const CONTEXT_FIELDS: &[ContextField] = &[
    ContextField {
        points: 30,
        constrained: |c| !c.org_types.is_empty(),
        matches: |c, d| c.org_types.contains(&d.org_type),
    },
    ContextField {
        points: 25,
        constrained: |c| !c.industries.is_empty(),
        matches: |c, d| c.industries.contains(&d.industry),
    },
    ContextField {
        points: 25,
        constrained: |c| !c.business_stages.is_empty(),
        matches: |c, d| c.business_stages.contains(&d.business_stage),
    },
    ContextField {
        points: 10,
        constrained: |c| !c.team_sizes.is_empty(),
        matches: |c, d| c.team_sizes.contains(&d.team_size),
    },
    ContextField {
        points: 10,
        constrained: |c| !c.regions.is_empty(),
        matches: |c, d| c.regions.contains(&d.region),
    },
];

/// Scores how well a variant context fits a respondent profile.
///
/// Additive over the weight table; a fully unconstrained context earns
/// the flat [`GENERIC_BASELINE_SCORE`] instead.
pub fn context_match_score(context: &RecommendationContext, demographics: &Demographics) -> u32 {
    if context.is_unconstrained() {
        return GENERIC_BASELINE_SCORE;
    }

    CONTEXT_FIELDS
        .iter()
        .filter(|f| (f.constrained)(context) && (f.matches)(context, demographics))
        .map(|f| f.points)
        .sum()
}

/// Number of constrained dimensions; the tie-break favors higher values
/// (more specific wins).
pub fn specificity(context: &RecommendationContext) -> usize {
    CONTEXT_FIELDS
        .iter()
        .filter(|f| (f.constrained)(context))
        .count()
}
