#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod infra;
pub mod notify;
pub mod repos;
pub mod services;
pub mod store;
pub mod view;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use error::AppError;
pub use infra::prefs::{FilePreferences, MemoryPreferences, PreferenceStore, WELCOME_COMPLETED};
pub use notify::{ConfirmPrompt, Notifier, TracingNotifier};
pub use services::dashboard::{AdminDashboard, CollectionState, DeleteOutcome};
pub use services::onboarding::OnboardingFlow;
pub use store::{Collection, Document, DocumentStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
