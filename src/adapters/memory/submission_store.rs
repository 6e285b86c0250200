//! In-memory implementation of SubmissionStore and UnlockReader.
//!
//! A single mutex makes every submission atomic, mirroring the database
//! transaction of the PostgreSQL adapter. Used by unit and integration
//! tests and by local development without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{AssessmentId, AttemptId, DomainError, ErrorCode, UserId};
use crate::domain::unlock::{GrantSet, SubmissionError, UnlockGrant};
use crate::ports::{SubmissionReceipt, SubmissionRecord, SubmissionStore, UnlockReader};

#[derive(Default)]
struct StoreState {
    balances: HashMap<String, u32>,
    grants: HashMap<String, GrantSet>,
    receipts: HashMap<(String, AttemptId), SubmissionReceipt>,
    submissions: Vec<StoredSubmission>,
}

/// A persisted submission row.
#[derive(Debug, Clone)]
pub struct StoredSubmission {
    pub assessment_id: AssessmentId,
    pub user_id: UserId,
    pub assessment_type: crate::domain::assessment::AssessmentType,
    pub score: f64,
}

/// In-memory, mutex-serialized submission store.
#[derive(Default)]
pub struct InMemorySubmissionStore {
    state: Mutex<StoreState>,
}

impl InMemorySubmissionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a respondent's credit balance.
    pub fn set_balance(&self, user_id: &UserId, credits: u32) {
        let mut state = self.state.lock().expect("store mutex poisoned");
        state.balances.insert(user_id.as_str().to_string(), credits);
    }

    /// Seeds existing grants for a respondent.
    pub fn seed_grants(&self, user_id: &UserId, grants: impl IntoIterator<Item = UnlockGrant>) {
        let mut state = self.state.lock().expect("store mutex poisoned");
        let set = state
            .grants
            .entry(user_id.as_str().to_string())
            .or_default();
        for grant in grants {
            set.insert(grant);
        }
    }

    /// Number of committed submissions (test observability).
    pub fn submission_count(&self) -> usize {
        self.state.lock().expect("store mutex poisoned").submissions.len()
    }

    /// Committed submissions for a respondent (test observability).
    pub fn submissions_for(&self, user_id: &UserId) -> Vec<StoredSubmission> {
        self.state
            .lock()
            .expect("store mutex poisoned")
            .submissions
            .iter()
            .filter(|s| s.user_id == *user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn submit(&self, record: &SubmissionRecord) -> Result<SubmissionReceipt, SubmissionError> {
        // One lock span = one transaction: every check and write below
        // either all happen or none do.
        let mut state = self.state.lock().expect("store mutex poisoned");
        let user_key = record.user_id.as_str().to_string();

        // Idempotency: a committed attempt replays its original receipt.
        if let Some(existing) = state.receipts.get(&(user_key.clone(), record.attempt_id)) {
            let mut receipt = existing.clone();
            receipt.duplicate = true;
            return Ok(receipt);
        }

        // Credit check before any write.
        let balance = state.balances.get(&user_key).copied().unwrap_or(0);
        if balance < record.credit_cost {
            return Err(SubmissionError::InsufficientCredits {
                available: balance,
                required: record.credit_cost,
            });
        }
        let new_balance = balance - record.credit_cost;

        // Grant insertion is idempotent; only newly-added grants are
        // reported back.
        let grant_set = state.grants.entry(user_key.clone()).or_default();
        let granted: Vec<UnlockGrant> = record
            .eligible_grants
            .iter()
            .filter(|g| grant_set.insert((*g).clone()))
            .cloned()
            .collect();

        state.balances.insert(user_key.clone(), new_balance);

        let assessment_id = AssessmentId::new();
        state.submissions.push(StoredSubmission {
            assessment_id,
            user_id: record.user_id.clone(),
            assessment_type: record.assessment_type,
            score: record.score,
        });

        let receipt = SubmissionReceipt {
            assessment_id,
            new_balance,
            granted,
            duplicate: false,
        };
        state
            .receipts
            .insert((user_key, record.attempt_id), receipt.clone());

        Ok(receipt)
    }
}

#[async_trait]
impl UnlockReader for InMemorySubmissionStore {
    async fn grants_for(&self, user_id: &UserId) -> Result<GrantSet, DomainError> {
        let state = self.state.lock().map_err(|_| {
            DomainError::new(ErrorCode::InternalError, "store mutex poisoned")
        })?;
        Ok(state.grants.get(user_id.as_str()).cloned().unwrap_or_default())
    }

    async fn credit_balance(&self, user_id: &UserId) -> Result<u32, DomainError> {
        let state = self.state.lock().map_err(|_| {
            DomainError::new(ErrorCode::InternalError, "store mutex poisoned")
        })?;
        Ok(state.balances.get(user_id.as_str()).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{AssessmentType, Interpretation};
    use crate::domain::foundation::Timestamp;

    fn test_user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn record(user: &UserId, attempt: AttemptId, cost: u32) -> SubmissionRecord {
        SubmissionRecord {
            user_id: user.clone(),
            attempt_id: attempt,
            assessment_type: AssessmentType::Cirf,
            answers_json: serde_json::json!({}),
            score: 62.0,
            interpretation: Interpretation::Established,
            section_scores: vec![],
            credit_cost: cost,
            eligible_grants: vec![
                UnlockGrant::Assessment(AssessmentType::Cimm),
                UnlockGrant::tool("innovation-intensity-ratio"),
            ],
            submitted_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn submit_deducts_credit_and_persists_grants() {
        let store = InMemorySubmissionStore::new();
        let user = test_user();
        store.set_balance(&user, 3);

        let receipt = store.submit(&record(&user, AttemptId::new(), 1)).await.unwrap();

        assert_eq!(receipt.new_balance, 2);
        assert_eq!(receipt.granted.len(), 2);
        assert!(!receipt.duplicate);
        assert_eq!(store.credit_balance(&user).await.unwrap(), 2);
        assert_eq!(store.submission_count(), 1);
    }

    #[tokio::test]
    async fn insufficient_credits_changes_nothing() {
        let store = InMemorySubmissionStore::new();
        let user = test_user();
        store.set_balance(&user, 0);

        let err = store.submit(&record(&user, AttemptId::new(), 1)).await.unwrap_err();

        assert!(matches!(
            err,
            SubmissionError::InsufficientCredits { available: 0, required: 1 }
        ));
        assert_eq!(store.submission_count(), 0);
        assert!(store.grants_for(&user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_attempt_replays_receipt_without_second_deduction() {
        let store = InMemorySubmissionStore::new();
        let user = test_user();
        store.set_balance(&user, 2);
        let attempt = AttemptId::new();

        let first = store.submit(&record(&user, attempt, 1)).await.unwrap();
        let second = store.submit(&record(&user, attempt, 1)).await.unwrap();

        assert_eq!(second.assessment_id, first.assessment_id);
        assert_eq!(second.new_balance, 1);
        assert!(second.duplicate);
        assert_eq!(store.credit_balance(&user).await.unwrap(), 1);
        assert_eq!(store.submission_count(), 1);
    }

    #[tokio::test]
    async fn regranting_held_grants_reports_nothing_new() {
        let store = InMemorySubmissionStore::new();
        let user = test_user();
        store.set_balance(&user, 5);
        store.seed_grants(&user, [UnlockGrant::Assessment(AssessmentType::Cimm)]);

        let receipt = store.submit(&record(&user, AttemptId::new(), 1)).await.unwrap();

        assert_eq!(
            receipt.granted,
            vec![UnlockGrant::tool("innovation-intensity-ratio")]
        );
    }

    #[tokio::test]
    async fn free_assessment_deducts_nothing() {
        let store = InMemorySubmissionStore::new();
        let user = test_user();
        store.set_balance(&user, 1);

        let receipt = store.submit(&record(&user, AttemptId::new(), 0)).await.unwrap();
        assert_eq!(receipt.new_balance, 1);
    }

    #[tokio::test]
    async fn retakes_with_new_attempts_create_new_results() {
        let store = InMemorySubmissionStore::new();
        let user = test_user();
        store.set_balance(&user, 2);

        store.submit(&record(&user, AttemptId::new(), 1)).await.unwrap();
        store.submit(&record(&user, AttemptId::new(), 1)).await.unwrap();

        assert_eq!(store.submissions_for(&user).len(), 2);
        assert_eq!(store.credit_balance(&user).await.unwrap(), 0);
    }
}
