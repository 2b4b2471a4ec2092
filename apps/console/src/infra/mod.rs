//! Infrastructure adapters behind the domain seams.

pub mod prefs;
