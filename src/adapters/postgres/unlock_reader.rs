//! PostgreSQL implementation of UnlockReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::assessment::AssessmentType;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::unlock::{GrantSet, UnlockGrant};
use crate::ports::UnlockReader;

/// PostgreSQL implementation of the UnlockReader port.
pub struct PostgresUnlockReader {
    pool: PgPool,
}

impl PostgresUnlockReader {
    /// Creates a new reader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_err(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl UnlockReader for PostgresUnlockReader {
    async fn grants_for(&self, user_id: &UserId) -> Result<GrantSet, DomainError> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT kind, grant_id FROM unlock_grants WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("failed to load grants", e))?;

        Ok(rows
            .into_iter()
            .filter_map(|(kind, id)| match kind.as_str() {
                "assessment" => id
                    .parse::<AssessmentType>()
                    .ok()
                    .map(UnlockGrant::Assessment),
                "tool" => Some(UnlockGrant::tool(id)),
                "resource" => Some(UnlockGrant::resource(id)),
                _ => None,
            })
            .collect())
    }

    async fn credit_balance(&self, user_id: &UserId) -> Result<u32, DomainError> {
        let row: Option<(i32,)> = sqlx::query_as(
            "SELECT balance FROM credit_balances WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("failed to read credit balance", e))?;

        Ok(row.map(|(b,)| b.max(0) as u32).unwrap_or(0))
    }
}
