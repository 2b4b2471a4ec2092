//! Console test support utilities
//!
//! Fake collaborators for the console components (document store, toast
//! surface, confirmation prompt, preference storage) plus unified logging
//! initialization and unique-ID helpers.

pub mod fake_store;
pub mod prefs;
pub mod recording;
pub mod test_logging;
pub mod unique_helpers;

pub use fake_store::FakeStore;
pub use prefs::SharedPrefs;
pub use recording::{Notice, RecordingNotifier, StaticPrompt};
