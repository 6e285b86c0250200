//! GetUnlockStatusHandler - dashboard view of a respondent's access.

use std::sync::Arc;

use crate::domain::assessment::{assessment_definition, AssessmentType, ALL_ASSESSMENT_TYPES};
use crate::domain::foundation::UserId;
use crate::domain::unlock::{SubmissionError, UnlockEvaluator, UnlockState};
use crate::ports::UnlockReader;

/// Query for a respondent's unlock status.
#[derive(Debug, Clone)]
pub struct GetUnlockStatusQuery {
    pub user_id: UserId,
}

/// One assessment's availability to the respondent.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentStatus {
    pub ty: AssessmentType,
    pub name: &'static str,
    pub full_name: &'static str,
    pub estimated_minutes: u8,
    pub open: bool,
    pub credit_cost: u32,
}

/// Full unlock state across the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct UnlockStatusResult {
    pub credit_balance: u32,
    pub assessments: Vec<AssessmentStatus>,
    pub tools: Vec<String>,
    pub resources: Vec<String>,
}

/// Handler for the unlock status query.
pub struct GetUnlockStatusHandler {
    reader: Arc<dyn UnlockReader>,
    evaluator: UnlockEvaluator,
}

impl GetUnlockStatusHandler {
    pub fn new(reader: Arc<dyn UnlockReader>) -> Self {
        Self {
            reader,
            evaluator: UnlockEvaluator::standard(),
        }
    }

    pub async fn handle(
        &self,
        query: GetUnlockStatusQuery,
    ) -> Result<UnlockStatusResult, SubmissionError> {
        let grants = self
            .reader
            .grants_for(&query.user_id)
            .await
            .map_err(|e| SubmissionError::storage(e.to_string()))?;
        let credit_balance = self
            .reader
            .credit_balance(&query.user_id)
            .await
            .map_err(|e| SubmissionError::storage(e.to_string()))?;

        let assessments = ALL_ASSESSMENT_TYPES
            .iter()
            .map(|ty| {
                let def = assessment_definition(*ty);
                AssessmentStatus {
                    ty: *ty,
                    name: def.name,
                    full_name: def.full_name,
                    estimated_minutes: def.estimated_minutes,
                    open: self.evaluator.assessment_state(*ty, &grants) == UnlockState::Granted,
                    credit_cost: def.credit_cost,
                }
            })
            .collect();

        Ok(UnlockStatusResult {
            credit_balance,
            assessments,
            tools: grants.tools().iter().map(|s| s.to_string()).collect(),
            resources: grants.resources().iter().map(|s| s.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySubmissionStore;
    use crate::domain::unlock::UnlockGrant;

    fn test_user() -> UserId {
        UserId::new("user-status-test").unwrap()
    }

    #[tokio::test]
    async fn fresh_respondent_sees_only_cirf_open() {
        let store = Arc::new(InMemorySubmissionStore::new());
        store.set_balance(&test_user(), 3);
        let handler = GetUnlockStatusHandler::new(store);

        let result = handler
            .handle(GetUnlockStatusQuery { user_id: test_user() })
            .await
            .unwrap();

        assert_eq!(result.credit_balance, 3);
        assert_eq!(result.assessments.len(), 6);
        for status in &result.assessments {
            assert_eq!(status.open, status.ty == AssessmentType::Cirf);
        }
        assert!(result.tools.is_empty());
        assert!(result.resources.is_empty());
    }

    #[tokio::test]
    async fn granted_items_appear_in_status() {
        let store = Arc::new(InMemorySubmissionStore::new());
        store.seed_grants(
            &test_user(),
            [
                UnlockGrant::Assessment(AssessmentType::Tbl),
                UnlockGrant::tool("tbl-calculator"),
                UnlockGrant::resource("resource-funding-guide-2026"),
            ],
        );
        let handler = GetUnlockStatusHandler::new(store);

        let result = handler
            .handle(GetUnlockStatusQuery { user_id: test_user() })
            .await
            .unwrap();

        let tbl = result
            .assessments
            .iter()
            .find(|s| s.ty == AssessmentType::Tbl)
            .unwrap();
        assert!(tbl.open);
        assert_eq!(result.tools, vec!["tbl-calculator".to_string()]);
        assert_eq!(
            result.resources,
            vec!["resource-funding-guide-2026".to_string()]
        );
    }
}
