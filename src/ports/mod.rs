//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SubmissionStore` - Atomic persistence of a scored submission
//! - `UnlockReader` - Read side for grants and credit balance
//! - `ResultNotifier` - Outbound results email dispatch

mod result_notifier;
mod submission_store;
mod unlock_reader;

pub use result_notifier::{ResultNotifier, ResultsEmail};
pub use submission_store::{SubmissionReceipt, SubmissionRecord, SubmissionStore};
pub use unlock_reader::UnlockReader;
