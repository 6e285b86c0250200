//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::assessment::{
    GetUnlockStatusHandler, GetUnlockStatusQuery, PreviewAssessmentHandler,
    PreviewAssessmentQuery, SubmitAssessmentCommand, SubmitAssessmentHandler,
};
use crate::domain::foundation::{ErrorCode, UserId};
use crate::domain::recommendation::RecommendationMatcher;
use crate::domain::unlock::SubmissionError;
use crate::ports::{ResultNotifier, SubmissionStore, UnlockReader};

use super::dto::{
    ErrorResponse, PreviewAssessmentRequest, PreviewAssessmentResponse, SubmitAssessmentRequest,
    SubmitAssessmentResponse, UnlockStatusResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned per request; dependencies are Arc-wrapped for cheap sharing.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub submission_store: Arc<dyn SubmissionStore>,
    pub unlock_reader: Arc<dyn UnlockReader>,
    pub result_notifier: Option<Arc<dyn ResultNotifier>>,
    /// Matcher carrying the configured threshold, caps, and weights.
    pub matcher: RecommendationMatcher,
}

impl AssessmentAppState {
    /// Create handlers on demand from the shared state.
    pub fn submit_handler(&self) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(
            self.submission_store.clone(),
            self.unlock_reader.clone(),
            self.result_notifier.clone(),
        )
        .with_matcher(self.matcher.clone())
    }

    pub fn preview_handler(&self) -> PreviewAssessmentHandler {
        PreviewAssessmentHandler::new().with_matcher(self.matcher.clone())
    }

    pub fn unlock_status_handler(&self) -> GetUnlockStatusHandler {
        GetUnlockStatusHandler::new(self.unlock_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// User Context (would come from auth middleware in production)
// ════════════════════════════════════════════════════════════════════════════════

/// Authenticated user context extracted from the request.
///
/// In production this would be extracted from a JWT/session by auth
/// middleware; for development and tests an `X-User-Id` header is
/// accepted.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection type for AuthenticatedUser extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::new("AUTHENTICATION_REQUIRED", "Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("X-User-Id")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| UserId::new(s).ok())
                .ok_or(AuthenticationRequired)?;

            Ok(AuthenticatedUser { user_id })
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Mapping
// ════════════════════════════════════════════════════════════════════════════════

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InsufficientCredits => StatusCode::PAYMENT_REQUIRED,
        ErrorCode::AssessmentLocked | ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::AlreadySubmitted => StatusCode::CONFLICT,
        ErrorCode::InvalidAnswers
        | ErrorCode::ValidationFailed
        | ErrorCode::InvalidFormat
        | ErrorCode::UnknownAssessmentType => StatusCode::BAD_REQUEST,
        ErrorCode::InsufficientData => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::AssessmentNotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn submission_error_response(err: SubmissionError) -> axum::response::Response {
    let code = err.code();
    let status = status_for(code);
    // Internal details stay in the logs.
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "submission failed with storage error");
        "Internal error".to_string()
    } else {
        err.to_string()
    };
    (status, Json(ErrorResponse::new(code.to_string(), message))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /assessments/submit
pub async fn submit_assessment(
    State(state): State<AssessmentAppState>,
    user: AuthenticatedUser,
    Json(request): Json<SubmitAssessmentRequest>,
) -> axum::response::Response {
    let command = SubmitAssessmentCommand {
        user_id: user.user_id,
        assessment_type: request.assessment_type,
        attempt_id: request.attempt_id,
        answers: request.answers,
        notify_email: request.notify_email,
    };

    match state.submit_handler().handle(command).await {
        Ok(result) => {
            let response: SubmitAssessmentResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => submission_error_response(err),
    }
}

/// POST /assessments/preview
///
/// Unauthenticated: the same scoring path without persistence or credit
/// movement.
pub async fn preview_assessment(
    State(state): State<AssessmentAppState>,
    Json(request): Json<PreviewAssessmentRequest>,
) -> axum::response::Response {
    let query = PreviewAssessmentQuery {
        assessment_type: request.assessment_type,
        answers: request.answers,
    };

    match state.preview_handler().handle(query) {
        Ok(result) => {
            let response: PreviewAssessmentResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => submission_error_response(err),
    }
}

/// GET /assessments/unlocks
pub async fn get_unlock_status(
    State(state): State<AssessmentAppState>,
    user: AuthenticatedUser,
) -> axum::response::Response {
    let query = GetUnlockStatusQuery {
        user_id: user.user_id,
    };

    match state.unlock_status_handler().handle(query).await {
        Ok(result) => {
            let response: UnlockStatusResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => submission_error_response(err),
    }
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
