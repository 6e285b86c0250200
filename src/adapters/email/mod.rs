//! Email adapters.

mod resend_notifier;

pub use resend_notifier::{ResendNotifier, ResendNotifierConfig};
