//! Assessment HTTP module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{AssessmentAppState, AuthenticatedUser};
pub use routes::assessment_router;
