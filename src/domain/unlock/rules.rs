//! Unlock rules - when a completed assessment earns new grants.

use crate::domain::assessment::{
    assessment_definition, AssessmentScores, AssessmentType, ALL_ASSESSMENT_TYPES,
};

use super::grant::UnlockGrant;

/// Which score a rule's threshold applies to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleMetric {
    /// The overall score, on the 0-100 scale.
    Overall,
    /// One construct's normalized score, on the [0,1] scale.
    Construct(&'static str),
}

/// One unlock rule: completing `prerequisite` with the metric at or
/// above `min_score` makes `grants` eligible.
#[derive(Debug, Clone, PartialEq)]
pub struct UnlockRule {
    pub prerequisite: AssessmentType,
    pub metric: RuleMetric,
    pub min_score: f64,
    pub grants: Vec<UnlockGrant>,
}

impl UnlockRule {
    /// Whether a completed result satisfies this rule's threshold.
    pub fn is_met(&self, scores: &AssessmentScores) -> bool {
        match self.metric {
            RuleMetric::Overall => scores.overall >= self.min_score,
            RuleMetric::Construct(id) => {
                scores.construct(id).map_or(false, |s| s >= self.min_score)
            }
        }
    }

    /// The standard rule set, derived from the assessment catalog:
    /// completion alone (threshold 0) unlocks the configured follow-on
    /// assessments, tools, and resources.
    pub fn standard_rules() -> Vec<UnlockRule> {
        ALL_ASSESSMENT_TYPES
            .iter()
            .filter_map(|ty| {
                let def = assessment_definition(*ty);
                let grants: Vec<UnlockGrant> = def
                    .unlocks
                    .iter()
                    .map(|unlocked| UnlockGrant::Assessment(*unlocked))
                    .chain(def.grants_tools.iter().map(|id| UnlockGrant::tool(*id)))
                    .chain(def.grants_resources.iter().map(|id| UnlockGrant::resource(*id)))
                    .collect();

                if grants.is_empty() {
                    None
                } else {
                    Some(UnlockRule {
                        prerequisite: *ty,
                        metric: RuleMetric::Overall,
                        min_score: 0.0,
                        grants,
                    })
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{AnswerMap, AnswerValue, ScoringBlueprint, ScoringEngine};

    fn cirf_scores(value: i64) -> AssessmentScores {
        let bp = ScoringBlueprint::for_type(AssessmentType::Cirf);
        let mut answers = AnswerMap::new();
        for q in bp.questions {
            answers.insert(q.id, AnswerValue::Likert(value));
        }
        ScoringEngine::score(bp, &answers).unwrap()
    }

    #[test]
    fn standard_rules_cover_every_granting_assessment() {
        let rules = UnlockRule::standard_rules();
        // All six assessments grant something on completion.
        assert_eq!(rules.len(), 6);
        assert!(rules.iter().all(|r| !r.grants.is_empty()));
    }

    #[test]
    fn cirf_rule_unlocks_five_assessments_and_resources() {
        let rules = UnlockRule::standard_rules();
        let cirf = rules
            .iter()
            .find(|r| r.prerequisite == AssessmentType::Cirf)
            .unwrap();

        let assessments = cirf
            .grants
            .iter()
            .filter(|g| matches!(g, UnlockGrant::Assessment(_)))
            .count();
        let resources = cirf
            .grants
            .iter()
            .filter(|g| matches!(g, UnlockGrant::Resource(_)))
            .count();

        assert_eq!(assessments, 5);
        assert_eq!(resources, 2);
    }

    #[test]
    fn zero_threshold_rule_is_met_by_any_completion() {
        let rules = UnlockRule::standard_rules();
        let cirf = rules
            .iter()
            .find(|r| r.prerequisite == AssessmentType::Cirf)
            .unwrap();

        assert!(cirf.is_met(&cirf_scores(1)));
        assert!(cirf.is_met(&cirf_scores(7)));
    }

    #[test]
    fn overall_threshold_gates_low_scores() {
        let rule = UnlockRule {
            prerequisite: AssessmentType::Cirf,
            metric: RuleMetric::Overall,
            min_score: 60.0,
            grants: vec![UnlockGrant::tool("sustainability-scorecard")],
        };

        assert!(!rule.is_met(&cirf_scores(4))); // overall 50
        assert!(rule.is_met(&cirf_scores(6))); // overall ~83
    }

    #[test]
    fn construct_metric_reads_normalized_scale() {
        let rule = UnlockRule {
            prerequisite: AssessmentType::Cirf,
            metric: RuleMetric::Construct("adaptiveResponse"),
            min_score: 0.5,
            grants: vec![UnlockGrant::tool("cultural-resilience-quotient")],
        };

        assert!(rule.is_met(&cirf_scores(4))); // 0.5, boundary inclusive
        assert!(!rule.is_met(&cirf_scores(3))); // ~0.33
    }

    #[test]
    fn construct_metric_on_missing_construct_is_not_met() {
        let rule = UnlockRule {
            prerequisite: AssessmentType::Cirf,
            metric: RuleMetric::Construct("notAConstruct"),
            min_score: 0.0,
            grants: vec![UnlockGrant::tool("x")],
        };
        assert!(!rule.is_met(&cirf_scores(7)));
    }
}
