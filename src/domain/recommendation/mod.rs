//! Recommendation module - Context-matched advice and case studies.
//!
//! The matcher selects the weakest constructs from a score set and, for
//! each, picks the best-fit advice variant for the respondent's profile
//! from an injected read-only library.

mod case_study;
mod content;
mod context;
mod library;
mod matcher;
mod variant;

pub use case_study::{
    CaseStudy, CaseStudyLibrary, CaseStudyMatchWeights, CaseStudyMatcher, MatchedCaseStudy,
};
pub use context::{context_match_score, specificity, RecommendationContext, GENERIC_BASELINE_SCORE};
pub use library::RecommendationLibrary;
pub use matcher::{ActionStep, MatcherOptions, PersonalizedRecommendation, RecommendationMatcher};
pub use variant::{AdvicePriority, RecommendationVariant, Timeframe, VariantStep};
