//! PostgreSQL adapters.

mod submission_store;
mod unlock_reader;

pub use submission_store::PostgresSubmissionStore;
pub use unlock_reader::PostgresUnlockReader;
