//! Result notifier port - outbound results email.
//!
//! Dispatch is fire-and-forget relative to the submission transaction:
//! implementations may retry internally, and failures must never roll
//! back or block an already-committed result.

use async_trait::async_trait;

use crate::domain::assessment::AssessmentType;
use crate::domain::foundation::DomainError;

/// The results summary sent to a respondent after submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsEmail {
    pub recipient: String,
    pub assessment_type: AssessmentType,
    /// Overall score, 0-100, already rounded for display.
    pub score: u8,
    pub level: String,
    pub level_description: String,
    /// (section label, rounded score) pairs.
    pub section_scores: Vec<(String, u8)>,
    /// (area, title) of the top recommendations.
    pub top_recommendations: Vec<(String, String)>,
}

/// Port for dispatching results summaries.
#[async_trait]
pub trait ResultNotifier: Send + Sync {
    /// Sends the results summary.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` after the implementation's retries
    /// are exhausted; callers log and move on.
    async fn send_results(&self, email: &ResultsEmail) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_notifier_is_object_safe() {
        fn _accepts_dyn(_notifier: &dyn ResultNotifier) {}
    }
}
