//! Assessment handlers: submit, preview, unlock status.

mod get_unlock_status;
mod preview_assessment;
mod submit_assessment;

pub use get_unlock_status::{
    AssessmentStatus, GetUnlockStatusHandler, GetUnlockStatusQuery, UnlockStatusResult,
};
pub use preview_assessment::{
    PreviewAssessmentHandler, PreviewAssessmentQuery, PreviewAssessmentResult,
    MIN_PREVIEW_ANSWERS,
};
pub use submit_assessment::{
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
