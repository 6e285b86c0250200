//! Unlock reader port (read side).
//!
//! Read-only access to a respondent's grants and credit balance, used
//! by the status query and the pre-submission lock check.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::unlock::GrantSet;

/// Read port for unlock state.
#[async_trait]
pub trait UnlockReader: Send + Sync {
    /// All grants the respondent currently holds.
    async fn grants_for(&self, user_id: &UserId) -> Result<GrantSet, DomainError>;

    /// The respondent's current credit balance.
    async fn credit_balance(&self, user_id: &UserId) -> Result<u32, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn UnlockReader) {}
    }
}
