//! Application services: stateful components a host UI drives directly.

pub mod dashboard;
pub mod onboarding;
