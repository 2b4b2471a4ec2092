//! Environment-driven configuration.

pub mod prefs;
