//! Unlock module - entitlement rules, grants, and submission errors.
//!
//! Per respondent and assessment type, access moves through a small
//! state machine: Locked -> Eligible -> Granted. Rule evaluation is
//! pure; the Eligible -> Granted transition is the persistence of the
//! grant, executed atomically with credit deduction by the submission
//! store.

mod errors;
mod evaluator;
mod grant;
mod rules;

pub use errors::SubmissionError;
pub use evaluator::{UnlockEvaluation, UnlockEvaluator, UnlockState};
pub use grant::{GrantSet, UnlockGrant};
pub use rules::{RuleMetric, UnlockRule};
