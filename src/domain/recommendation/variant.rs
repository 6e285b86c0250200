//! Recommendation variant types - one piece of context-tagged advice.

use serde::{Deserialize, Serialize};

use super::context::RecommendationContext;

/// When an action step should happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeframe {
    ThisWeek,
    ThisMonth,
    ThisQuarter,
    Ongoing,
}

/// Editorial priority of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvicePriority {
    Critical,
    High,
    Medium,
    Low,
}

/// One ordered action step inside a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStep {
    pub action: &'static str,
    pub timeframe: Timeframe,
}

/// One piece of advice written for a specific respondent context.
///
/// Many variants may exist per construct; exactly one context-free
/// variant per covered construct acts as the fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationVariant {
    pub id: &'static str,
    pub context: RecommendationContext,
    pub title: &'static str,
    pub description: &'static str,
    pub steps: &'static [VariantStep],
    pub related_case_studies: &'static [&'static str],
    pub impact: &'static str,
    pub priority: AdvicePriority,
}

impl RecommendationVariant {
    /// A variant with no context constraints is the generic fallback.
    pub fn is_generic(&self) -> bool {
        self.context.is_unconstrained()
    }
}
