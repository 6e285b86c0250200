//! Axum router configuration for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_unlock_status, health, preview_assessment, submit_assessment, AssessmentAppState,
};

/// Create the assessment API router.
///
/// # Routes
///
/// ## Authenticated endpoints
/// - `POST /submit` - Submit a completed assessment (consumes a credit)
/// - `GET /unlocks` - Unlock and grant status for the caller
///
/// ## Public endpoints
/// - `POST /preview` - Non-persisted preview score (>= 10 answers)
pub fn assessment_routes() -> Router<AssessmentAppState> {
    Router::new()
        .route("/submit", post(submit_assessment))
        .route("/preview", post(preview_assessment))
        .route("/unlocks", get(get_unlock_status))
}

/// Create the complete API router, suitable for mounting at `/api`.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .nest("/api", assessment_router())
///     .with_state(app_state);
/// ```
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new()
        .nest("/assessments", assessment_routes())
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::memory::InMemorySubmissionStore;
    use crate::domain::recommendation::{
        CaseStudyLibrary, RecommendationLibrary, RecommendationMatcher,
    };

    fn test_state() -> AssessmentAppState {
        let store = Arc::new(InMemorySubmissionStore::new());
        AssessmentAppState {
            submission_store: store.clone(),
            unlock_reader: store,
            result_notifier: None,
            matcher: RecommendationMatcher::new(
                RecommendationLibrary::builtin(),
                CaseStudyLibrary::builtin(),
            ),
        }
    }

    #[test]
    fn assessment_routes_create_router() {
        let router = assessment_routes();
        let _: Router<()> = router.with_state(test_state());
    }

    #[test]
    fn assessment_router_creates_combined_router() {
        let router = assessment_router();
        let _: Router<()> = router.with_state(test_state());
    }
}
