//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations and coordinates between ports. Command
//! handlers own the write path; query handlers the read path.

pub mod handlers;

pub use handlers::{
    AssessmentStatus, GetUnlockStatusHandler, GetUnlockStatusQuery, PreviewAssessmentHandler,
    PreviewAssessmentQuery, PreviewAssessmentResult, SubmitAssessmentCommand,
    SubmitAssessmentHandler, SubmitAssessmentResult, UnlockStatusResult, MIN_PREVIEW_ANSWERS,
};
