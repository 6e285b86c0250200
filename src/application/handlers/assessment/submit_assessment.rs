//! SubmitAssessmentHandler - the credit-consuming submission flow.
//!
//! Validates and scores the answers, evaluates unlock rules, and hands
//! the result to the submission store, which persists it atomically with
//! the credit deduction. The results email is dispatched after commit,
//! fire-and-forget.

use std::sync::Arc;

use crate::domain::assessment::{
    assessment_definition, AnswerMap, AssessmentType, Interpretation, ScoringBlueprint,
    ScoringEngine, SectionScore,
};
use crate::domain::foundation::{AssessmentId, AttemptId, Percentage, Timestamp, UserId};
use crate::domain::profile::Demographics;
use crate::domain::recommendation::{
    CaseStudyLibrary, PersonalizedRecommendation, RecommendationLibrary, RecommendationMatcher,
};
use crate::domain::unlock::{SubmissionError, UnlockEvaluator, UnlockGrant};
use crate::ports::{ResultNotifier, ResultsEmail, SubmissionRecord, SubmissionStore, UnlockReader};

/// Command to submit a completed assessment.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub user_id: UserId,
    pub assessment_type: AssessmentType,
    /// Client-generated idempotency token for this logical submission.
    pub attempt_id: AttemptId,
    pub answers: AnswerMap,
    /// When present, a results summary is emailed after commit.
    pub notify_email: Option<String>,
}

/// The complete, internally consistent submission result.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub assessment_id: AssessmentId,
    /// Overall score, 0-100.
    pub score: f64,
    pub interpretation: Interpretation,
    pub section_scores: Vec<SectionScore>,
    pub recommendations: Vec<PersonalizedRecommendation>,
    pub unlocked_assessments: Vec<AssessmentType>,
    pub granted_tools: Vec<String>,
    pub granted_resources: Vec<String>,
    pub new_balance: u32,
    /// True when this response replays an already-committed attempt.
    pub duplicate: bool,
}

/// Handler for assessment submission.
pub struct SubmitAssessmentHandler {
    store: Arc<dyn SubmissionStore>,
    reader: Arc<dyn UnlockReader>,
    notifier: Option<Arc<dyn ResultNotifier>>,
    evaluator: UnlockEvaluator,
    matcher: RecommendationMatcher,
}

impl SubmitAssessmentHandler {
    /// Creates a handler over the standard rules and builtin libraries.
    pub fn new(
        store: Arc<dyn SubmissionStore>,
        reader: Arc<dyn UnlockReader>,
        notifier: Option<Arc<dyn ResultNotifier>>,
    ) -> Self {
        Self {
            store,
            reader,
            notifier,
            evaluator: UnlockEvaluator::standard(),
            matcher: RecommendationMatcher::new(
                RecommendationLibrary::builtin(),
                CaseStudyLibrary::builtin(),
            ),
        }
    }

    /// Substitutes a configured matcher (threshold, caps, weights).
    pub fn with_matcher(mut self, matcher: RecommendationMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, SubmissionError> {
        let definition = assessment_definition(cmd.assessment_type);
        let blueprint = ScoringBlueprint::for_type(cmd.assessment_type);

        // Entitlement check before any scoring work.
        let grants = self
            .reader
            .grants_for(&cmd.user_id)
            .await
            .map_err(|e| SubmissionError::storage(e.to_string()))?;
        if !grants.is_assessment_open(cmd.assessment_type) {
            return Err(SubmissionError::AssessmentLocked(cmd.assessment_type));
        }

        blueprint.validate_submission(&cmd.answers)?;

        // Scores are always computed server-side from the raw answers.
        let scores = ScoringEngine::score(blueprint, &cmd.answers)?;
        let interpretation = Interpretation::classify(scores.overall);
        let demographics = Demographics::extract(&cmd.answers);
        let recommendations =
            self.matcher
                .recommend(&scores.constructs, scores.overall, &demographics);

        let evaluation = self.evaluator.evaluate(cmd.assessment_type, &scores, &grants);

        let answers_json = serde_json::to_value(&cmd.answers)
            .map_err(|e| SubmissionError::storage(format!("failed to serialize answers: {}", e)))?;

        let record = SubmissionRecord {
            user_id: cmd.user_id.clone(),
            attempt_id: cmd.attempt_id,
            assessment_type: cmd.assessment_type,
            answers_json,
            score: scores.overall,
            interpretation,
            section_scores: scores.sections.clone(),
            credit_cost: definition.credit_cost,
            // The store re-filters against held grants inside the
            // transaction; eligible is the authoritative input.
            eligible_grants: evaluation.eligible,
            submitted_at: Timestamp::now(),
        };

        let receipt = self.store.submit(&record).await?;

        tracing::info!(
            user_id = %cmd.user_id,
            assessment_type = %cmd.assessment_type,
            assessment_id = %receipt.assessment_id,
            score = scores.overall,
            credits_used = if receipt.duplicate { 0 } else { definition.credit_cost },
            new_balance = receipt.new_balance,
            granted = receipt.granted.len(),
            duplicate = receipt.duplicate,
            "assessment submitted"
        );

        if !receipt.duplicate {
            self.dispatch_notification(&cmd, scores.overall, interpretation, &scores.sections, &recommendations);
        }

        let mut unlocked_assessments = Vec::new();
        let mut granted_tools = Vec::new();
        let mut granted_resources = Vec::new();
        for grant in &receipt.granted {
            match grant {
                UnlockGrant::Assessment(ty) => unlocked_assessments.push(*ty),
                UnlockGrant::Tool(id) => granted_tools.push(id.clone()),
                UnlockGrant::Resource(id) => granted_resources.push(id.clone()),
            }
        }

        Ok(SubmitAssessmentResult {
            assessment_id: receipt.assessment_id,
            score: scores.overall,
            interpretation,
            section_scores: scores.sections,
            recommendations,
            unlocked_assessments,
            granted_tools,
            granted_resources,
            new_balance: receipt.new_balance,
            duplicate: receipt.duplicate,
        })
    }

    /// Spawns the results email in the background. Never blocks or fails
    /// the committed submission.
    fn dispatch_notification(
        &self,
        cmd: &SubmitAssessmentCommand,
        score: f64,
        interpretation: Interpretation,
        sections: &[SectionScore],
        recommendations: &[PersonalizedRecommendation],
    ) {
        let (Some(notifier), Some(recipient)) = (self.notifier.clone(), cmd.notify_email.clone())
        else {
            return;
        };

        let email = ResultsEmail {
            recipient,
            assessment_type: cmd.assessment_type,
            score: Percentage::from_score(score).value(),
            level: interpretation.level().to_string(),
            level_description: interpretation.description().to_string(),
            section_scores: sections
                .iter()
                .map(|s| (s.label.to_string(), Percentage::from_score(s.score).value()))
                .collect(),
            top_recommendations: recommendations
                .iter()
                .take(3)
                .map(|r| (r.area.clone(), r.title.clone()))
                .collect(),
        };

        tokio::spawn(async move {
            if let Err(e) = notifier.send_results(&email).await {
                tracing::warn!(error = %e, "results email dispatch failed");
            }
        });
    }
}
