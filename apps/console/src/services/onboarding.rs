//! Onboarding flow service.
//!
//! A linear sequence of informational steps. The flow only moves forward,
//! can be skipped to completion from any step, and on completion persists
//! the `welcomeCompleted` flag and invokes the host callback exactly once.
//! Step position is never persisted; a fresh flow always starts at step 0.

use crate::domain::steps::{welcome_steps, StepDescriptor};
use crate::error::AppError;
use crate::infra::prefs::{PreferenceStore, WELCOME_COMPLETED};

pub struct OnboardingFlow<P, F>
where
    P: PreferenceStore,
    F: FnMut(),
{
    steps: Vec<StepDescriptor>,
    current: usize,
    completed: bool,
    prefs: P,
    on_complete: F,
}

impl<P, F> std::fmt::Debug for OnboardingFlow<P, F>
where
    P: PreferenceStore,
    F: FnMut(),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingFlow")
            .field("steps", &self.steps)
            .field("current", &self.current)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}

impl<P, F> OnboardingFlow<P, F>
where
    P: PreferenceStore,
    F: FnMut(),
{
    /// Flow over the reference bingo onboarding steps.
    pub fn new(prefs: P, on_complete: F) -> Self {
        Self {
            steps: welcome_steps(),
            current: 0,
            completed: false,
            prefs,
            on_complete,
        }
    }

    /// Flow over a caller-supplied step sequence. At least one step is
    /// required; the current index must always address a real step.
    pub fn with_steps(
        steps: Vec<StepDescriptor>,
        prefs: P,
        on_complete: F,
    ) -> Result<Self, AppError> {
        if steps.is_empty() {
            return Err(AppError::invalid(
                "EMPTY_STEPS",
                "onboarding requires at least one step".to_string(),
            ));
        }
        Ok(Self {
            steps,
            current: 0,
            completed: false,
            prefs,
            on_complete,
        })
    }

    /// Move one step forward; on the last step this finishes the flow.
    pub fn advance(&mut self) {
        if self.completed {
            return;
        }
        if self.current + 1 < self.steps.len() {
            self.current += 1;
        } else {
            self.finish();
        }
    }

    /// Finish immediately from any step.
    pub fn skip(&mut self) {
        if self.completed {
            return;
        }
        self.finish();
    }

    // Sole terminal transition. The completion flag write is best-effort:
    // a storage failure must not block the host from moving past onboarding,
    // so it is logged and the callback still fires.
    fn finish(&mut self) {
        self.completed = true;
        if let Err(err) = self.prefs.set_flag(WELCOME_COMPLETED, true) {
            tracing::warn!(error = %err, "failed to persist onboarding completion flag");
        }
        (self.on_complete)();
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &StepDescriptor {
        &self.steps[self.current]
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }
}
