//! Error handling for the console crate.

pub mod domain;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::DomainError;
