//! Submission store port - the one transactional boundary.
//!
//! A submission couples four writes that must commit together or not at
//! all: the idempotency token for the attempt, the credit deduction, the
//! assessment result, and the net-new grants. Implementations enforce
//! this with a single database transaction.
//!
//! # Idempotency
//!
//! The (user, attempt) pair is a server-held idempotency key checked
//! inside the same transaction as the credit deduction. A duplicate
//! arriving after the original committed returns the original receipt
//! with `duplicate = true`; one racing the original in flight fails with
//! `AlreadySubmitted`. Either way exactly one credit is deducted.

use async_trait::async_trait;

use crate::domain::assessment::{AssessmentType, Interpretation, SectionScore};
use crate::domain::foundation::{AssessmentId, AttemptId, Timestamp, UserId};
use crate::domain::unlock::{SubmissionError, UnlockGrant};

/// Everything the store needs to persist one scored submission.
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub user_id: UserId,
    pub attempt_id: AttemptId,
    pub assessment_type: AssessmentType,
    /// Raw answers, persisted for auditability and retake comparison.
    pub answers_json: serde_json::Value,
    /// Overall score, 0-100.
    pub score: f64,
    pub interpretation: Interpretation,
    pub section_scores: Vec<SectionScore>,
    /// Credits to deduct; 0 for free assessments.
    pub credit_cost: u32,
    /// Grants whose rules were met; the store persists the subset not
    /// already held and reports it back.
    pub eligible_grants: Vec<UnlockGrant>,
    pub submitted_at: Timestamp,
}

/// What the store reports back after a committed (or replayed) submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub assessment_id: AssessmentId,
    /// Credit balance after the deduction.
    pub new_balance: u32,
    /// Net-new grants persisted by this submission.
    pub granted: Vec<UnlockGrant>,
    /// True when this receipt replays an already-committed attempt.
    pub duplicate: bool,
}

/// Port for atomic submission persistence.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Atomically persists a submission.
    ///
    /// All of: attempt token, credit deduction, result row, and net-new
    /// grants commit together; any failure rolls the whole set back.
    ///
    /// # Errors
    ///
    /// - `InsufficientCredits` if the balance cannot cover the cost
    /// - `AlreadySubmitted` if the attempt is in flight concurrently
    /// - `Storage` on infrastructure failure (fully rolled back)
    async fn submit(&self, record: &SubmissionRecord) -> Result<SubmissionReceipt, SubmissionError>;
}
