use crate::domain::steps::{progress_markers, welcome_steps, StepIcon};

#[test]
fn reference_configuration_has_three_steps() {
    let steps = welcome_steps();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0].title, "Welcome to Bingo Game!");
    assert_eq!(steps[0].icon, StepIcon::Trophy);
    assert_eq!(steps[1].icon, StepIcon::Gamepad);
    assert_eq!(steps[2].icon, StepIcon::Gift);
    for step in &steps {
        assert_eq!(step.features.len(), 4);
    }
}

#[test]
fn markers_track_current_index() {
    assert_eq!(progress_markers(3, 0), vec![true, false, false]);
    assert_eq!(progress_markers(3, 1), vec![true, true, false]);
    assert_eq!(progress_markers(3, 2), vec![true, true, true]);
}
