//! Submission error types.
//!
//! Errors crossing the submission boundary, with machine-readable codes
//! for the API contract.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InsufficientCredits | 402 |
//! | AssessmentLocked | 403 |
//! | AlreadySubmitted | 409 |
//! | InvalidAnswers | 400 |
//! | InsufficientData | 422 |
//! | Storage | 500 |

use thiserror::Error;

use crate::domain::assessment::{AssessmentType, ScoringError, SubmissionValidationError};
use crate::domain::foundation::{AttemptId, ErrorCode};

/// Errors from the submission path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    /// The respondent's credit balance cannot cover the assessment.
    #[error("insufficient credits: {available} available, {required} required")]
    InsufficientCredits { available: u32, required: u32 },

    /// This attempt is already committed or currently in flight.
    #[error("attempt {0} was already submitted")]
    AlreadySubmitted(AttemptId),

    /// The assessment's prerequisite has not been completed.
    #[error("assessment '{0}' is locked; complete its prerequisite first")]
    AssessmentLocked(AssessmentType),

    /// Answers failed validation before scoring.
    #[error("invalid answers: {0}")]
    InvalidAnswers(String),

    /// Not enough answered questions to produce a score.
    #[error("not enough answered questions to produce a score")]
    InsufficientData,

    /// Persistence failure; the transaction was rolled back.
    #[error("storage error: {0}")]
    Storage(String),
}

impl SubmissionError {
    /// Constructor for storage failures.
    pub fn storage(message: impl Into<String>) -> Self {
        SubmissionError::Storage(message.into())
    }

    /// The machine-readable code carried on API responses.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmissionError::InsufficientCredits { .. } => ErrorCode::InsufficientCredits,
            SubmissionError::AlreadySubmitted(_) => ErrorCode::AlreadySubmitted,
            SubmissionError::AssessmentLocked(_) => ErrorCode::AssessmentLocked,
            SubmissionError::InvalidAnswers(_) => ErrorCode::InvalidAnswers,
            SubmissionError::InsufficientData => ErrorCode::InsufficientData,
            SubmissionError::Storage(_) => ErrorCode::DatabaseError,
        }
    }

    /// True if retrying the identical request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmissionError::Storage(_))
    }
}

impl From<SubmissionValidationError> for SubmissionError {
    fn from(err: SubmissionValidationError) -> Self {
        SubmissionError::InvalidAnswers(err.to_string())
    }
}

impl From<ScoringError> for SubmissionError {
    fn from(err: ScoringError) -> Self {
        match err {
            ScoringError::InsufficientData => SubmissionError::InsufficientData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_api_contract() {
        let err = SubmissionError::InsufficientCredits {
            available: 0,
            required: 1,
        };
        assert_eq!(err.code().to_string(), "INSUFFICIENT_CREDITS");

        let err = SubmissionError::AlreadySubmitted(AttemptId::new());
        assert_eq!(err.code().to_string(), "ALREADY_SUBMITTED");

        let err = SubmissionError::AssessmentLocked(AssessmentType::Cimm);
        assert_eq!(err.code().to_string(), "ASSESSMENT_LOCKED");
    }

    #[test]
    fn validation_errors_convert_with_detail() {
        let err: SubmissionError = SubmissionValidationError::TooFewAnswers {
            required: 17,
            answered: 3,
        }
        .into();
        assert!(matches!(err, SubmissionError::InvalidAnswers(ref msg) if msg.contains("17")));
    }

    #[test]
    fn scoring_errors_convert_to_insufficient_data() {
        let err: SubmissionError = ScoringError::InsufficientData.into();
        assert_eq!(err, SubmissionError::InsufficientData);
    }

    #[test]
    fn only_storage_errors_are_retryable() {
        assert!(SubmissionError::storage("connection reset").is_retryable());
        assert!(!SubmissionError::InsufficientData.is_retryable());
        assert!(!SubmissionError::AlreadySubmitted(AttemptId::new()).is_retryable());
    }
}
