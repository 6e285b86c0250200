//! Use-case handlers, grouped by area.

pub mod assessment;

pub use assessment::{
    AssessmentStatus, GetUnlockStatusHandler, GetUnlockStatusQuery, PreviewAssessmentHandler,
    PreviewAssessmentQuery, PreviewAssessmentResult, SubmitAssessmentCommand,
    SubmitAssessmentHandler, SubmitAssessmentResult, UnlockStatusResult, MIN_PREVIEW_ANSWERS,
};
