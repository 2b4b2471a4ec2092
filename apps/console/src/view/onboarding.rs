//! Onboarding view assembly.

use serde::Serialize;

use crate::domain::steps::{progress_markers, StepDescriptor};
use crate::infra::prefs::PreferenceStore;
use crate::services::onboarding::OnboardingFlow;

/// Renderable state of the current onboarding step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingView {
    pub step: StepDescriptor,
    /// One marker per step; reached markers are at or before the current step.
    pub markers: Vec<bool>,
    pub primary_label: &'static str,
    pub skip_label: &'static str,
}

/// View for the step currently shown, or `None` once the flow completed and
/// no further steps render.
pub fn onboarding_view<P, F>(flow: &OnboardingFlow<P, F>) -> Option<OnboardingView>
where
    P: PreferenceStore,
    F: FnMut(),
{
    if flow.is_completed() {
        return None;
    }
    Some(OnboardingView {
        step: flow.current_step().clone(),
        markers: progress_markers(flow.step_count(), flow.current_index()),
        primary_label: if flow.is_last_step() {
            "Get Started"
        } else {
            "Next"
        },
        skip_label: "Skip Tutorial",
    })
}
