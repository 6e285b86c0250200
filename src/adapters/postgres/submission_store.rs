//! PostgreSQL implementation of SubmissionStore.
//!
//! One sqlx transaction carries the full submission: attempt token,
//! credit deduction, result row, and grant rows commit together or roll
//! back together. The credit row is locked with `FOR UPDATE` so
//! concurrent submissions from the same respondent serialize.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::assessment::AssessmentType;
use crate::domain::foundation::AssessmentId;
use crate::domain::unlock::{SubmissionError, UnlockGrant};
use crate::ports::{SubmissionReceipt, SubmissionRecord, SubmissionStore};

/// PostgreSQL implementation of the SubmissionStore port.
pub struct PostgresSubmissionStore {
    pool: PgPool,
}

impl PostgresSubmissionStore {
    /// Creates a new store with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_err(context: &str, e: impl std::fmt::Display) -> SubmissionError {
    SubmissionError::storage(format!("{}: {}", context, e))
}

/// Splits a grant into its (kind, id) column pair.
fn grant_columns(grant: &UnlockGrant) -> (&'static str, String) {
    match grant {
        UnlockGrant::Assessment(ty) => ("assessment", ty.as_str().to_string()),
        UnlockGrant::Tool(id) => ("tool", id.clone()),
        UnlockGrant::Resource(id) => ("resource", id.clone()),
    }
}

/// Rebuilds a grant from its (kind, id) column pair.
fn grant_from_columns(kind: &str, id: &str) -> Option<UnlockGrant> {
    match kind {
        "assessment" => id.parse::<AssessmentType>().ok().map(UnlockGrant::Assessment),
        "tool" => Some(UnlockGrant::tool(id)),
        "resource" => Some(UnlockGrant::resource(id)),
        _ => None,
    }
}

impl PostgresSubmissionStore {
    /// Replays the receipt of an already-committed attempt, if any.
    async fn find_committed_receipt(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        record: &SubmissionRecord,
    ) -> Result<Option<SubmissionReceipt>, SubmissionError> {
        let row: Option<(Uuid, i32)> = sqlx::query_as(
            r#"
            SELECT assessment_id, balance_after
            FROM submission_attempts
            WHERE user_id = $1 AND attempt_id = $2
            "#,
        )
        .bind(record.user_id.as_str())
        .bind(record.attempt_id.as_uuid())
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| storage_err("failed to check attempt token", e))?;

        let Some((assessment_id, balance_after)) = row else {
            return Ok(None);
        };

        let grant_rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT kind, grant_id
            FROM unlock_grants
            WHERE user_id = $1 AND granted_by_assessment_id = $2
            ORDER BY granted_at, grant_id
            "#,
        )
        .bind(record.user_id.as_str())
        .bind(assessment_id)
        .fetch_all(&mut **tx)
        .await
        .map_err(|e| storage_err("failed to load replayed grants", e))?;

        Ok(Some(SubmissionReceipt {
            assessment_id: AssessmentId::from_uuid(assessment_id),
            new_balance: balance_after.max(0) as u32,
            granted: grant_rows
                .iter()
                .filter_map(|(kind, id)| grant_from_columns(kind, id))
                .collect(),
            duplicate: true,
        }))
    }
}

#[async_trait]
impl SubmissionStore for PostgresSubmissionStore {
    async fn submit(&self, record: &SubmissionRecord) -> Result<SubmissionReceipt, SubmissionError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_err("failed to begin transaction", e))?;

        // A committed duplicate is absorbed as a no-op replay.
        if let Some(receipt) = self.find_committed_receipt(&mut tx, record).await? {
            return Ok(receipt);
        }

        // Lock the credit row; concurrent submissions for the same
        // respondent serialize here.
        let balance: Option<(i32,)> = sqlx::query_as(
            "SELECT balance FROM credit_balances WHERE user_id = $1 FOR UPDATE",
        )
        .bind(record.user_id.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| storage_err("failed to read credit balance", e))?;

        let balance = balance.map(|(b,)| b.max(0) as u32).unwrap_or(0);
        if balance < record.credit_cost {
            // Rolls back implicitly when tx drops.
            return Err(SubmissionError::InsufficientCredits {
                available: balance,
                required: record.credit_cost,
            });
        }
        let new_balance = balance - record.credit_cost;

        let assessment_id = AssessmentId::new();

        let interpretation_json = serde_json::json!({
            "level": record.interpretation.level(),
            "description": record.interpretation.description(),
            "color": record.interpretation.color(),
        });
        let section_scores_json = serde_json::to_value(&record.section_scores)
            .map_err(|e| storage_err("failed to serialize section scores", e))?;

        sqlx::query(
            r#"
            INSERT INTO assessment_submissions (
                id, user_id, assessment_type, answers, score,
                interpretation, section_scores, submitted_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(assessment_id.as_uuid())
        .bind(record.user_id.as_str())
        .bind(record.assessment_type.as_str())
        .bind(&record.answers_json)
        .bind(record.score)
        .bind(interpretation_json)
        .bind(section_scores_json)
        .bind(record.submitted_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| storage_err("failed to persist assessment result", e))?;

        // Claim the attempt token. A concurrent twin that got here first
        // wins the unique constraint; this caller is rejected and its
        // writes roll back with the transaction.
        let claimed = sqlx::query(
            r#"
            INSERT INTO submission_attempts (user_id, attempt_id, assessment_id, balance_after)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, attempt_id) DO NOTHING
            "#,
        )
        .bind(record.user_id.as_str())
        .bind(record.attempt_id.as_uuid())
        .bind(assessment_id.as_uuid())
        .bind(new_balance as i32)
        .execute(&mut *tx)
        .await
        .map_err(|e| storage_err("failed to claim attempt token", e))?;

        if claimed.rows_affected() == 0 {
            return Err(SubmissionError::AlreadySubmitted(record.attempt_id));
        }

        if record.credit_cost > 0 {
            sqlx::query(
                "UPDATE credit_balances SET balance = $2, updated_at = NOW() WHERE user_id = $1",
            )
            .bind(record.user_id.as_str())
            .bind(new_balance as i32)
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_err("failed to deduct credit", e))?;
        }

        // Idempotent grant insertion; only rows that were actually new
        // are reported back.
        let mut granted = Vec::new();
        for grant in &record.eligible_grants {
            let (kind, grant_id) = grant_columns(grant);
            let inserted = sqlx::query(
                r#"
                INSERT INTO unlock_grants (user_id, kind, grant_id, granted_by_assessment_id)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (user_id, kind, grant_id) DO NOTHING
                "#,
            )
            .bind(record.user_id.as_str())
            .bind(kind)
            .bind(&grant_id)
            .bind(assessment_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_err("failed to persist grant", e))?;

            if inserted.rows_affected() > 0 {
                granted.push(grant.clone());
            }
        }

        tx.commit()
            .await
            .map_err(|e| storage_err("failed to commit submission", e))?;

        Ok(SubmissionReceipt {
            assessment_id,
            new_balance,
            granted,
            duplicate: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_columns_roundtrip() {
        for grant in [
            UnlockGrant::Assessment(AssessmentType::Cimm),
            UnlockGrant::tool("tbl-calculator"),
            UnlockGrant::resource("resource-funding-guide-2026"),
        ] {
            let (kind, id) = grant_columns(&grant);
            assert_eq!(grant_from_columns(kind, &id), Some(grant));
        }
    }

    #[test]
    fn unknown_grant_kind_is_skipped() {
        assert_eq!(grant_from_columns("badge", "gold-star"), None);
        assert_eq!(grant_from_columns("assessment", "not-a-type"), None);
    }
}
