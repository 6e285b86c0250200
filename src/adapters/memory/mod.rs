//! In-memory adapters for tests and local development.

mod submission_store;

pub use submission_store::{InMemorySubmissionStore, StoredSubmission};
