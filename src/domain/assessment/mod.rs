//! Assessment module - Question catalog, answers, and scoring.
//!
//! Everything in this module is pure computation over the static
//! assessment configuration and a respondent's answer map.

mod answer;
mod blueprint;
mod catalog;
mod interpretation;
mod scoring;

pub use answer::{AnswerMap, AnswerValue};
pub use blueprint::{
    construct_label, ScoredQuestion, ScoringBlueprint, SectionDef, SubmissionValidationError,
};
pub use catalog::{
    assessment_definition, tool_definition, AssessmentDefinition, AssessmentType, ToolCategory,
    ToolDefinition, ALL_ASSESSMENT_TYPES, TOOL_DEFINITIONS,
};
pub use interpretation::Interpretation;
pub use scoring::{
    AssessmentScores, ScoringEngine, ScoringError, SectionScore, SECTION_COMPLETION_GATE,
};
