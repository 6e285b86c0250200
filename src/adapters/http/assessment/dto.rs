//! HTTP DTOs (Data Transfer Objects) for assessment endpoints.
//!
//! These types define the JSON request/response structure for the
//! assessment API and form the boundary between HTTP and the
//! application layer.

use serde::{Deserialize, Serialize};

use crate::application::handlers::assessment::{
    PreviewAssessmentResult, SubmitAssessmentResult, UnlockStatusResult,
};
use crate::domain::assessment::{AnswerMap, AssessmentType, Interpretation, SectionScore};
use crate::domain::foundation::{AttemptId, Percentage};
use crate::domain::recommendation::PersonalizedRecommendation;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to submit a completed assessment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentRequest {
    pub assessment_type: AssessmentType,
    /// Client-generated idempotency token for this logical submission.
    pub attempt_id: AttemptId,
    /// Question id -> answer value; nulls are treated as unanswered.
    pub answers: AnswerMap,
    /// When present, a results summary is emailed after commit.
    #[serde(default)]
    pub notify_email: Option<String>,
}

/// Request for a non-persisted preview score.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewAssessmentRequest {
    pub assessment_type: AssessmentType,
    pub answers: AnswerMap,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Machine-readable error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Interpretation band for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct InterpretationDto {
    pub level: String,
    pub description: String,
    pub color: String,
}

impl From<Interpretation> for InterpretationDto {
    fn from(band: Interpretation) -> Self {
        Self {
            level: band.level().to_string(),
            description: band.description().to_string(),
            color: band.color().to_string(),
        }
    }
}

/// One section's score for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScoreDto {
    pub id: String,
    pub label: String,
    /// Rounded 0-100 score.
    pub score: u8,
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
}

impl From<&SectionScore> for SectionScoreDto {
    fn from(s: &SectionScore) -> Self {
        Self {
            id: s.id.to_string(),
            label: s.label.to_string(),
            score: Percentage::from_score(s.score).value(),
            answered: s.answered,
            total: s.total,
            complete: s.complete,
        }
    }
}

/// Response for a committed (or replayed) submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentResponse {
    pub assessment_id: String,
    /// Rounded 0-100 overall score.
    pub score: u8,
    pub interpretation: InterpretationDto,
    pub section_scores: Vec<SectionScoreDto>,
    pub recommendations: Vec<PersonalizedRecommendation>,
    pub unlocked_assessments: Vec<AssessmentType>,
    pub granted_tools: Vec<String>,
    pub granted_resources: Vec<String>,
    pub new_balance: u32,
    pub duplicate: bool,
}

impl From<SubmitAssessmentResult> for SubmitAssessmentResponse {
    fn from(result: SubmitAssessmentResult) -> Self {
        Self {
            assessment_id: result.assessment_id.to_string(),
            score: Percentage::from_score(result.score).value(),
            interpretation: result.interpretation.into(),
            section_scores: result.section_scores.iter().map(Into::into).collect(),
            recommendations: result.recommendations,
            unlocked_assessments: result.unlocked_assessments,
            granted_tools: result.granted_tools,
            granted_resources: result.granted_resources,
            new_balance: result.new_balance,
            duplicate: result.duplicate,
        }
    }
}

/// Response for a preview score.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewAssessmentResponse {
    pub score: u8,
    pub interpretation: InterpretationDto,
    pub section_scores: Vec<SectionScoreDto>,
    pub recommendations: Vec<PersonalizedRecommendation>,
    pub answered: usize,
    pub total_questions: usize,
}

impl From<PreviewAssessmentResult> for PreviewAssessmentResponse {
    fn from(result: PreviewAssessmentResult) -> Self {
        Self {
            score: Percentage::from_score(result.score).value(),
            interpretation: result.interpretation.into(),
            section_scores: result.section_scores.iter().map(Into::into).collect(),
            recommendations: result.recommendations,
            answered: result.answered,
            total_questions: result.total_questions,
        }
    }
}

/// One assessment's availability in the status response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentStatusDto {
    pub assessment_type: AssessmentType,
    pub name: String,
    pub full_name: String,
    pub estimated_minutes: u8,
    pub open: bool,
    pub credit_cost: u32,
}

/// Response for the unlock status query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockStatusResponse {
    pub credit_balance: u32,
    pub assessments: Vec<AssessmentStatusDto>,
    pub tools: Vec<String>,
    pub resources: Vec<String>,
}

impl From<UnlockStatusResult> for UnlockStatusResponse {
    fn from(result: UnlockStatusResult) -> Self {
        Self {
            credit_balance: result.credit_balance,
            assessments: result
                .assessments
                .into_iter()
                .map(|s| AssessmentStatusDto {
                    assessment_type: s.ty,
                    name: s.name.to_string(),
                    full_name: s.full_name.to_string(),
                    estimated_minutes: s.estimated_minutes,
                    open: s.open,
                    credit_cost: s.credit_cost,
                })
                .collect(),
            tools: result.tools,
            resources: result.resources,
        }
    }
}
