//! Recommendation matcher - weakest constructs to ranked advice.
//!
//! Selects constructs scoring below the threshold, picks the best-fit
//! variant per construct for the respondent's profile, and binds the
//! result to their actual scores with attached case studies.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::assessment::construct_label;
use crate::domain::foundation::Percentage;
use crate::domain::profile::Demographics;

use super::case_study::{CaseStudyLibrary, CaseStudyMatcher, MatchedCaseStudy};
use super::context::{context_match_score, specificity, GENERIC_BASELINE_SCORE};
use super::library::RecommendationLibrary;
use super::variant::{RecommendationVariant, Timeframe};

/// Tunables for the matcher. Defaults follow the platform configuration.
#[derive(Debug, Clone, Copy)]
pub struct MatcherOptions {
    /// Constructs scoring below this normalized threshold are weak.
    pub score_threshold: f64,
    /// Cap on the number of recommendations returned.
    pub max_recommendations: usize,
    /// Fixed target score bound into every recommendation.
    pub target_score: Percentage,
    /// Case studies attached per recommendation.
    pub case_studies_per_recommendation: usize,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            score_threshold: 0.7,
            max_recommendations: 5,
            target_score: Percentage::new(70),
            case_studies_per_recommendation: 2,
        }
    }
}

/// One resolved action step, owned for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionStep {
    pub action: String,
    pub timeframe: Timeframe,
}

/// The resolved, ranked output bound to the respondent's profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalizedRecommendation {
    /// Rank; 1 = weakest construct.
    pub priority: usize,
    pub construct: String,
    /// Human label for the construct.
    pub area: String,
    pub current_score: Percentage,
    pub target_score: Percentage,
    pub title: String,
    pub description: String,
    pub action_steps: Vec<ActionStep>,
    pub impact: String,
    /// Prose summary of the profile the advice was selected for.
    pub context_label: String,
    pub related_case_studies: Vec<MatchedCaseStudy>,
}

/// The recommendation matching engine.
#[derive(Clone)]
pub struct RecommendationMatcher {
    library: RecommendationLibrary,
    case_studies: CaseStudyLibrary,
    case_matcher: CaseStudyMatcher,
    options: MatcherOptions,
}

impl RecommendationMatcher {
    /// Creates a matcher over the given registries with default options.
    pub fn new(library: RecommendationLibrary, case_studies: CaseStudyLibrary) -> Self {
        Self {
            library,
            case_studies,
            case_matcher: CaseStudyMatcher::default(),
            options: MatcherOptions::default(),
        }
    }

    /// Overrides the matcher options.
    pub fn with_options(mut self, options: MatcherOptions) -> Self {
        self.options = options;
        self
    }

    /// Overrides the case study match weights.
    pub fn with_case_study_weights(mut self, weights: super::CaseStudyMatchWeights) -> Self {
        self.case_matcher = CaseStudyMatcher::with_weights(weights);
        self
    }

    /// Generates ranked recommendations for the given scores and profile.
    ///
    /// Every construct below the threshold (up to the cap) yields exactly
    /// one recommendation: a matched variant when the library covers the
    /// construct, a synthesized generic one otherwise.
    pub fn recommend(
        &self,
        construct_scores: &BTreeMap<&'static str, f64>,
        overall_score: f64,
        demographics: &Demographics,
    ) -> Vec<PersonalizedRecommendation> {
        let mut weak: Vec<(&str, f64)> = construct_scores
            .iter()
            .filter(|(_, score)| **score < self.options.score_threshold)
            .map(|(construct, score)| (*construct, *score))
            .collect();

        // Weakest first; BTreeMap iteration keeps equal scores in stable
        // alphabetical order.
        weak.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        weak.truncate(self.options.max_recommendations);

        let context_label = demographics.context_label();

        weak.into_iter()
            .enumerate()
            .map(|(rank, (construct, score))| {
                match self.best_variant(construct, demographics) {
                    Some(variant) => self.resolve(
                        rank + 1,
                        construct,
                        score,
                        variant,
                        demographics,
                        overall_score,
                        &context_label,
                    ),
                    None => self.synthesize(rank + 1, construct, score, &context_label),
                }
            })
            .collect()
    }

    /// Picks the best-scoring variant for a construct, if any exist.
    ///
    /// Tie-break: more context constraints wins, then declaration order.
    /// A winner below the low-confidence floor is replaced by the
    /// construct's explicit context-free default when one exists.
    fn best_variant(
        &self,
        construct: &str,
        demographics: &Demographics,
    ) -> Option<&RecommendationVariant> {
        let best = self
            .library
            .variants_for(construct)
            .map(|(index, variant)| {
                (
                    context_match_score(&variant.context, demographics),
                    specificity(&variant.context),
                    index,
                    variant,
                )
            })
            .max_by(|a, b| {
                a.0.cmp(&b.0)
                    .then(a.1.cmp(&b.1))
                    // Earlier declaration wins the final tie.
                    .then(b.2.cmp(&a.2))
            })?;

        if best.0 < GENERIC_BASELINE_SCORE {
            if let Some(default) = self.library.default_for(construct) {
                return Some(default);
            }
        }

        Some(best.3)
    }

    #[allow(clippy::too_many_arguments)]
    fn resolve(
        &self,
        priority: usize,
        construct: &str,
        score: f64,
        variant: &RecommendationVariant,
        demographics: &Demographics,
        overall_score: f64,
        context_label: &str,
    ) -> PersonalizedRecommendation {
        let related_case_studies = self.case_matcher.top_matches(
            &self.case_studies,
            demographics,
            construct,
            overall_score,
            variant.related_case_studies,
            self.options.case_studies_per_recommendation,
        );

        PersonalizedRecommendation {
            priority,
            construct: construct.to_string(),
            area: construct_label(construct),
            current_score: Percentage::from_fraction(score),
            target_score: self.options.target_score,
            title: variant.title.to_string(),
            description: variant.description.to_string(),
            action_steps: variant
                .steps
                .iter()
                .map(|s| ActionStep {
                    action: s.action.to_string(),
                    timeframe: s.timeframe,
                })
                .collect(),
            impact: variant.impact.to_string(),
            context_label: context_label.to_string(),
            related_case_studies,
        }
    }

    /// Minimal generic recommendation for constructs the library does not
    /// cover; a weak construct must always surface something actionable.
    fn synthesize(
        &self,
        priority: usize,
        construct: &str,
        score: f64,
        context_label: &str,
    ) -> PersonalizedRecommendation {
        let area = construct_label(construct);
        PersonalizedRecommendation {
            priority,
            construct: construct.to_string(),
            title: format!("Improve {}", area),
            description: "Focus on strengthening this area to improve your overall resilience."
                .to_string(),
            action_steps: vec![
                ActionStep {
                    action: "Assess your current situation in this area".to_string(),
                    timeframe: Timeframe::ThisWeek,
                },
                ActionStep {
                    action: "Identify specific improvement opportunities".to_string(),
                    timeframe: Timeframe::ThisMonth,
                },
                ActionStep {
                    action: "Implement changes and track progress".to_string(),
                    timeframe: Timeframe::Ongoing,
                },
            ],
            impact: "Will contribute to overall resilience improvement".to_string(),
            area,
            current_score: Percentage::from_fraction(score),
            target_score: self.options.target_score,
            context_label: context_label.to_string(),
            related_case_studies: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{BusinessStage, Industry, OrganizationType, Region, TeamSize};

    fn crafts_coop_startup() -> Demographics {
        Demographics {
            org_type: OrganizationType::Cooperative,
            industry: Industry::Crafts,
            business_stage: BusinessStage::Startup,
            team_size: TeamSize::SixToTen,
            region: Region::AsiaPacific,
            revenue_range: None,
        }
    }

    fn matcher() -> RecommendationMatcher {
        RecommendationMatcher::new(
            RecommendationLibrary::builtin(),
            CaseStudyLibrary::builtin(),
        )
    }

    fn scores(entries: &[(&'static str, f64)]) -> BTreeMap<&'static str, f64> {
        entries.iter().copied().collect()
    }

    #[test]
    fn strong_constructs_produce_no_recommendations() {
        let recs = matcher().recommend(
            &scores(&[("financialReserves", 0.9), ("adaptiveResponse", 0.75)]),
            80.0,
            &crafts_coop_startup(),
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn weakest_construct_ranks_first() {
        let recs = matcher().recommend(
            &scores(&[
                ("financialReserves", 0.5),
                ("adaptiveResponse", 0.2),
                ("communityInvolvement", 0.65),
            ]),
            45.0,
            &crafts_coop_startup(),
        );

        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].construct, "adaptiveResponse");
        assert_eq!(recs[0].priority, 1);
        assert_eq!(recs[1].construct, "financialReserves");
        assert_eq!(recs[2].construct, "communityInvolvement");
    }

    #[test]
    fn cap_limits_recommendation_count() {
        let recs = matcher().recommend(
            &scores(&[
                ("a1", 0.1),
                ("a2", 0.2),
                ("a3", 0.3),
                ("a4", 0.4),
                ("a5", 0.5),
                ("a6", 0.6),
            ]),
            30.0,
            &crafts_coop_startup(),
        );
        assert_eq!(recs.len(), 5);
        assert_eq!(recs.last().unwrap().construct, "a5");
    }

    #[test]
    fn cooperative_gets_cooperative_specific_financial_variant() {
        // A cooperative in crafts at the startup stage scoring low on
        // financial reserves: the cooperative variant wins on the +30
        // org-type match over the solo variant's +25 stage match.
        let recs = matcher().recommend(
            &scores(&[("financialReserves", 0.3)]),
            52.0,
            &crafts_coop_startup(),
        );

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Establish a Cooperative Reserve Fund");
        assert_eq!(recs[0].current_score, Percentage::new(30));
        assert_eq!(recs[0].target_score, Percentage::new(70));
        assert_eq!(
            recs[0].context_label,
            "For cooperatives in crafts at the startup stage"
        );
    }

    #[test]
    fn solo_practitioner_gets_solo_variant() {
        let demo = Demographics {
            org_type: OrganizationType::Individual,
            business_stage: BusinessStage::Startup,
            ..Demographics::default()
        };
        let recs = matcher().recommend(&scores(&[("financialReserves", 0.3)]), 40.0, &demo);
        assert_eq!(recs[0].title, "Build Your Craft Emergency Fund");
    }

    #[test]
    fn unmatched_profile_falls_back_to_generic_default() {
        // A government agency at growth stage matches none of the
        // financial variants' constraints, so the winner scores 0 and the
        // explicit context-free default takes over.
        let demo = Demographics {
            org_type: OrganizationType::Government,
            business_stage: BusinessStage::Growth,
            ..Demographics::default()
        };
        let recs = matcher().recommend(&scores(&[("financialReserves", 0.4)]), 50.0, &demo);
        assert_eq!(recs[0].title, "Build Operating Reserves");
    }

    #[test]
    fn uncovered_construct_synthesizes_generic_advice() {
        let recs = matcher().recommend(
            &scores(&[("jobCreation", 0.2)]),
            45.0,
            &crafts_coop_startup(),
        );

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Improve Job Creation");
        assert_eq!(recs[0].action_steps.len(), 3);
        assert!(recs[0].related_case_studies.is_empty());
    }

    #[test]
    fn every_weak_construct_appears_exactly_once() {
        let weak = scores(&[
            ("financialReserves", 0.3),
            ("jobCreation", 0.4),
            ("adaptiveResponse", 0.5),
        ]);
        let recs = matcher().recommend(&weak, 45.0, &crafts_coop_startup());

        assert_eq!(recs.len(), 3);
        let mut constructs: Vec<&str> = recs.iter().map(|r| r.construct.as_str()).collect();
        constructs.sort();
        constructs.dedup();
        assert_eq!(constructs.len(), 3);
    }

    #[test]
    fn case_studies_are_attached_with_reasons() {
        let recs = matcher().recommend(
            &scores(&[("financialReserves", 0.3)]),
            52.0,
            &crafts_coop_startup(),
        );

        let cases = &recs[0].related_case_studies;
        assert!(!cases.is_empty());
        assert!(cases.len() <= 2);
        for case in cases {
            assert!(!case.match_reasons.is_empty());
        }
    }

    #[test]
    fn recommendations_are_deterministic() {
        let weak = scores(&[("financialReserves", 0.3), ("adaptiveResponse", 0.3)]);
        let demo = crafts_coop_startup();
        let first = matcher().recommend(&weak, 52.0, &demo);
        let second = matcher().recommend(&weak, 52.0, &demo);
        assert_eq!(first, second);
    }

    #[test]
    fn threshold_boundary_is_exclusive() {
        // Exactly at the threshold is not weak.
        let recs = matcher().recommend(
            &scores(&[("financialReserves", 0.7)]),
            70.0,
            &crafts_coop_startup(),
        );
        assert!(recs.is_empty());
    }
}
