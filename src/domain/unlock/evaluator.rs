//! Unlock rule evaluator - pure computation of earned grants.
//!
//! Given which assessment was just completed, its scores, and the
//! respondent's existing grants, the evaluator reports the grants that
//! became eligible and the net-new subset that was not already held.
//! Persisting net-new grants (the Eligible -> Granted transition) is the
//! submission store's job, inside the same transaction as the credit
//! deduction.

use crate::domain::assessment::{AssessmentScores, AssessmentType};

use super::grant::{GrantSet, UnlockGrant};
use super::rules::UnlockRule;

/// Per-respondent, per-assessment access state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockState {
    /// Prerequisite not yet satisfied.
    Locked,
    /// Rule threshold met this submission; grant not yet persisted.
    Eligible,
    /// Grant persisted; access is live.
    Granted,
}

/// Result of evaluating the rules for one completed assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct UnlockEvaluation {
    /// Every grant whose rule was satisfied, already held or not.
    pub eligible: Vec<UnlockGrant>,
    /// Eligible grants not already held; the only ones announced and
    /// persisted.
    pub net_new: Vec<UnlockGrant>,
}

impl UnlockEvaluation {
    /// State of one grant as of this pre-persistence evaluation.
    pub fn grant_state(&self, grant: &UnlockGrant, existing: &GrantSet) -> UnlockState {
        if existing.contains(grant) {
            UnlockState::Granted
        } else if self.eligible.contains(grant) {
            UnlockState::Eligible
        } else {
            UnlockState::Locked
        }
    }
}

/// Evaluates unlock rules against completed assessment results.
#[derive(Debug, Clone)]
pub struct UnlockEvaluator {
    rules: Vec<UnlockRule>,
}

impl UnlockEvaluator {
    /// Evaluator over the catalog-derived standard rules.
    pub fn standard() -> Self {
        Self {
            rules: UnlockRule::standard_rules(),
        }
    }

    /// Evaluator over an explicit rule set (fixtures in tests).
    pub fn with_rules(rules: Vec<UnlockRule>) -> Self {
        Self { rules }
    }

    /// Evaluates which grants a completed assessment earns.
    ///
    /// Pure and idempotent: evaluating twice against the same grant set
    /// yields the same output, and evaluating against a grant set that
    /// already contains the eligible grants yields an empty `net_new`.
    pub fn evaluate(
        &self,
        completed: AssessmentType,
        scores: &AssessmentScores,
        existing: &GrantSet,
    ) -> UnlockEvaluation {
        let eligible: Vec<UnlockGrant> = self
            .rules
            .iter()
            .filter(|rule| rule.prerequisite == completed && rule.is_met(scores))
            .flat_map(|rule| rule.grants.iter().cloned())
            .collect();

        let net_new = eligible
            .iter()
            .filter(|grant| !existing.contains(grant))
            .cloned()
            .collect();

        UnlockEvaluation { eligible, net_new }
    }

    /// Current access state for an assessment type from persisted grants.
    ///
    /// `Eligible` is a transient, in-submission state and never derives
    /// from persisted grants alone.
    pub fn assessment_state(&self, ty: AssessmentType, existing: &GrantSet) -> UnlockState {
        if existing.is_assessment_open(ty) {
            UnlockState::Granted
        } else {
            UnlockState::Locked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{AnswerMap, AnswerValue, ScoringBlueprint, ScoringEngine};
    use crate::domain::unlock::rules::RuleMetric;

    fn scores_for(ty: AssessmentType, value: i64) -> AssessmentScores {
        let bp = ScoringBlueprint::for_type(ty);
        let mut answers = AnswerMap::new();
        for q in bp.questions {
            answers.insert(q.id, AnswerValue::Likert(value));
        }
        ScoringEngine::score(bp, &answers).unwrap()
    }

    #[test]
    fn completing_cirf_unlocks_the_secondary_tier() {
        let evaluator = UnlockEvaluator::standard();
        let result = evaluator.evaluate(
            AssessmentType::Cirf,
            &scores_for(AssessmentType::Cirf, 5),
            &GrantSet::new(),
        );

        assert_eq!(result.net_new.len(), 7); // 5 assessments + 2 resources
        assert!(result
            .net_new
            .contains(&UnlockGrant::Assessment(AssessmentType::Cimm)));
        assert!(result
            .net_new
            .contains(&UnlockGrant::resource("resource-funding-guide-2026")));
    }

    #[test]
    fn completing_a_secondary_assessment_grants_its_tools() {
        let evaluator = UnlockEvaluator::standard();
        let result = evaluator.evaluate(
            AssessmentType::Tbl,
            &scores_for(AssessmentType::Tbl, 5),
            &GrantSet::new(),
        );

        assert_eq!(
            result.net_new,
            vec![
                UnlockGrant::tool("tbl-calculator"),
                UnlockGrant::tool("economic-multiplier"),
            ]
        );
    }

    #[test]
    fn grants_already_held_are_filtered_from_net_new() {
        let evaluator = UnlockEvaluator::standard();
        let scores = scores_for(AssessmentType::Cirf, 5);

        let first = evaluator.evaluate(AssessmentType::Cirf, &scores, &GrantSet::new());
        let after: GrantSet = first.net_new.iter().cloned().collect();
        let second = evaluator.evaluate(AssessmentType::Cirf, &scores, &after);

        assert_eq!(second.eligible, first.eligible);
        assert!(second.net_new.is_empty());
    }

    #[test]
    fn partial_prior_grants_yield_only_the_missing_ones() {
        let evaluator = UnlockEvaluator::standard();
        let existing: GrantSet = [UnlockGrant::Assessment(AssessmentType::Cimm)]
            .into_iter()
            .collect();

        let result = evaluator.evaluate(
            AssessmentType::Cirf,
            &scores_for(AssessmentType::Cirf, 5),
            &existing,
        );

        assert_eq!(result.eligible.len(), 7);
        assert_eq!(result.net_new.len(), 6);
        assert!(!result
            .net_new
            .contains(&UnlockGrant::Assessment(AssessmentType::Cimm)));
    }

    #[test]
    fn threshold_rule_blocks_grants_below_it() {
        let evaluator = UnlockEvaluator::with_rules(vec![UnlockRule {
            prerequisite: AssessmentType::Cirf,
            metric: RuleMetric::Overall,
            min_score: 60.0,
            grants: vec![UnlockGrant::tool("advanced-analysis")],
        }]);

        let low = evaluator.evaluate(
            AssessmentType::Cirf,
            &scores_for(AssessmentType::Cirf, 4),
            &GrantSet::new(),
        );
        assert!(low.eligible.is_empty());

        let high = evaluator.evaluate(
            AssessmentType::Cirf,
            &scores_for(AssessmentType::Cirf, 6),
            &GrantSet::new(),
        );
        assert_eq!(high.net_new, vec![UnlockGrant::tool("advanced-analysis")]);
    }

    #[test]
    fn rules_for_other_prerequisites_do_not_fire() {
        let evaluator = UnlockEvaluator::standard();
        let result = evaluator.evaluate(
            AssessmentType::Cimm,
            &scores_for(AssessmentType::Cimm, 7),
            &GrantSet::new(),
        );

        // Only CIMM's own tools; nothing from the CIRF rule.
        assert_eq!(result.net_new.len(), 2);
        assert!(result
            .net_new
            .iter()
            .all(|g| matches!(g, UnlockGrant::Tool(_))));
    }

    #[test]
    fn grant_state_walks_the_unlock_state_machine() {
        let evaluator = UnlockEvaluator::standard();
        let scores = scores_for(AssessmentType::Cirf, 5);
        let held: GrantSet = [UnlockGrant::Assessment(AssessmentType::Cimm)]
            .into_iter()
            .collect();

        let evaluation = evaluator.evaluate(AssessmentType::Cirf, &scores, &held);

        // Already persisted, newly eligible, and untouched grants land in
        // their respective states.
        assert_eq!(
            evaluation.grant_state(&UnlockGrant::Assessment(AssessmentType::Cimm), &held),
            UnlockState::Granted
        );
        assert_eq!(
            evaluation.grant_state(&UnlockGrant::Assessment(AssessmentType::Tbl), &held),
            UnlockState::Eligible
        );
        assert_eq!(
            evaluation.grant_state(&UnlockGrant::tool("tbl-calculator"), &held),
            UnlockState::Locked
        );
    }

    #[test]
    fn assessment_state_reflects_persisted_grants() {
        let evaluator = UnlockEvaluator::standard();
        let mut grants = GrantSet::new();

        assert_eq!(
            evaluator.assessment_state(AssessmentType::Cirf, &grants),
            UnlockState::Granted
        );
        assert_eq!(
            evaluator.assessment_state(AssessmentType::Ciss, &grants),
            UnlockState::Locked
        );

        grants.insert(UnlockGrant::Assessment(AssessmentType::Ciss));
        assert_eq!(
            evaluator.assessment_state(AssessmentType::Ciss, &grants),
            UnlockState::Granted
        );
    }
}
