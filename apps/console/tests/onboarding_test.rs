use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;

use console::services::onboarding::OnboardingFlow;
use console::view::onboarding_view;
use console::{MemoryPreferences, WELCOME_COMPLETED};
use console_test_support::SharedPrefs;

#[ctor::ctor]
fn init_logging() {
    console_test_support::test_logging::init();
}

fn counting_flow() -> (
    OnboardingFlow<SharedPrefs, impl FnMut()>,
    SharedPrefs,
    Arc<AtomicUsize>,
) {
    let prefs = SharedPrefs::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let flow = OnboardingFlow::new(prefs.clone(), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (flow, prefs, calls)
}

/// Test: advancing through all steps completes exactly once, writing the
/// flag exactly once and invoking the callback exactly once
#[test]
fn advance_to_completion_fires_exactly_once() {
    let (mut flow, prefs, calls) = counting_flow();
    let steps = flow.step_count();
    assert_eq!(steps, 3);

    // The first n-1 advances move forward without completing.
    for expected in 1..steps {
        flow.advance();
        assert_eq!(flow.current_index(), expected);
        assert!(!flow.is_completed());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!prefs.flag(WELCOME_COMPLETED));
    }

    // The n-th advance is the terminal transition.
    flow.advance();
    assert!(flow.is_completed());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(prefs.flag(WELCOME_COMPLETED));
    assert_eq!(prefs.write_count(WELCOME_COMPLETED), 1);

    // Completed is terminal: further calls are no-ops.
    flow.advance();
    flow.skip();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(prefs.write_count(WELCOME_COMPLETED), 1);
}

/// Test: skip completes from any step with the same observable effect
#[test]
fn skip_completes_from_any_step() {
    for skip_at in 0..3 {
        let (mut flow, prefs, calls) = counting_flow();
        for _ in 0..skip_at {
            flow.advance();
        }

        flow.skip();

        assert!(flow.is_completed());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(prefs.write_count(WELCOME_COMPLETED), 1);
        assert!(onboarding_view(&flow).is_none(), "no further steps render");
    }
}

/// Test: the rendered view tracks the current step content, markers, and
/// button labels
#[test]
fn view_tracks_step_and_markers() {
    let (mut flow, _prefs, _calls) = counting_flow();

    let view = onboarding_view(&flow).expect("step 0 renders");
    assert_eq!(view.step.title, "Welcome to Bingo Game!");
    assert_eq!(view.markers, vec![true, false, false]);
    assert_eq!(view.primary_label, "Next");
    assert_eq!(view.skip_label, "Skip Tutorial");

    flow.advance();
    flow.advance();
    let view = onboarding_view(&flow).expect("last step renders");
    assert_eq!(view.step.title, "Winning Patterns");
    assert_eq!(view.markers, vec![true, true, true]);
    assert_eq!(view.primary_label, "Get Started");
}

/// Test: a fresh flow always starts at step 0 even when the flag is already
/// persisted from a previous session
#[test]
fn restart_begins_at_step_zero() {
    let mut prefs = MemoryPreferences::new();
    {
        use console::PreferenceStore;
        prefs.set_flag(WELCOME_COMPLETED, true).expect("set flag");
    }

    let flow = OnboardingFlow::new(prefs, || {});
    assert_eq!(flow.current_index(), 0);
    assert!(!flow.is_completed());
}

/// Test: empty step lists are rejected
#[test]
fn empty_steps_are_rejected() {
    let err = OnboardingFlow::with_steps(Vec::new(), MemoryPreferences::new(), || {}).unwrap_err();
    assert_eq!(err.code(), "EMPTY_STEPS");
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Advance,
    Skip,
}

proptest! {
    // For any operation sequence containing at least one skip or enough
    // advances, completion happens exactly once; the index never decreases
    // and never leaves the valid range.
    #[test]
    fn completion_is_exactly_once(ops in proptest::collection::vec(
        prop_oneof![9 => Just(Op::Advance), 1 => Just(Op::Skip)],
        0..20,
    )) {
        let prefs = SharedPrefs::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut flow = OnboardingFlow::new(prefs.clone(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut last_index = 0;
        for op in ops {
            match op {
                Op::Advance => flow.advance(),
                Op::Skip => flow.skip(),
            }
            prop_assert!(flow.current_index() >= last_index);
            prop_assert!(flow.current_index() < flow.step_count());
            last_index = flow.current_index();
        }

        let completions = calls.load(Ordering::SeqCst);
        prop_assert!(completions <= 1);
        prop_assert_eq!(prefs.write_count(WELCOME_COMPLETED), completions);
        prop_assert_eq!(flow.is_completed(), completions == 1);
    }
}
