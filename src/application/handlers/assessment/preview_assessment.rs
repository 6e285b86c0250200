//! PreviewAssessmentHandler - non-persisted, non-credit-consuming scoring.
//!
//! The same pure scoring path as submission, available before sign-up:
//! nothing is saved, no credit moves, and a lighter minimum-answer
//! threshold applies.

use crate::domain::assessment::{
    AnswerMap, AssessmentType, Interpretation, ScoringBlueprint, ScoringEngine, SectionScore,
};
use crate::domain::profile::Demographics;
use crate::domain::recommendation::{
    CaseStudyLibrary, PersonalizedRecommendation, RecommendationLibrary, RecommendationMatcher,
};
use crate::domain::unlock::SubmissionError;

/// Minimum answered Likert questions before a preview is computed.
pub const MIN_PREVIEW_ANSWERS: usize = 10;

/// Query for a preview score.
#[derive(Debug, Clone)]
pub struct PreviewAssessmentQuery {
    pub assessment_type: AssessmentType,
    pub answers: AnswerMap,
}

/// A non-persisted scoring result.
#[derive(Debug, Clone)]
pub struct PreviewAssessmentResult {
    /// Overall score, 0-100.
    pub score: f64,
    pub interpretation: Interpretation,
    pub section_scores: Vec<SectionScore>,
    pub recommendations: Vec<PersonalizedRecommendation>,
    pub answered: usize,
    pub total_questions: usize,
}

/// Handler for preview scoring. Pure; no ports involved.
pub struct PreviewAssessmentHandler {
    matcher: RecommendationMatcher,
}

impl Default for PreviewAssessmentHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewAssessmentHandler {
    /// Creates a handler over the builtin libraries.
    pub fn new() -> Self {
        Self {
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

    pub fn handle(
        &self,
        query: PreviewAssessmentQuery,
    ) -> Result<PreviewAssessmentResult, SubmissionError> {
        let blueprint = ScoringBlueprint::for_type(query.assessment_type);

        let answered = query
            .answers
            .answered_likert_count(blueprint.questions.iter().map(|q| q.id));
        if answered < MIN_PREVIEW_ANSWERS {
            return Err(SubmissionError::InsufficientData);
        }

        let scores = ScoringEngine::score(blueprint, &query.answers)?;
        let demographics = Demographics::extract(&query.answers);
        let recommendations =
            self.matcher
                .recommend(&scores.constructs, scores.overall, &demographics);

        Ok(PreviewAssessmentResult {
            score: scores.overall,
            interpretation: Interpretation::classify(scores.overall),
            section_scores: scores.sections,
            recommendations,
            answered: scores.answered,
            total_questions: scores.total_questions,
        })
    }
}
