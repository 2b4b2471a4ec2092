//! Domain layer: pure onboarding step data and helpers.

pub mod steps;

#[cfg(test)]
mod tests_props_steps;
#[cfg(test)]
mod tests_steps;

// Re-exports for ergonomics
pub use steps::{progress_markers, welcome_steps, StepDescriptor, StepIcon};
