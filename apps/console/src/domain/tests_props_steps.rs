use proptest::prelude::*;

use crate::domain::steps::progress_markers;

proptest! {
    // Marker count always equals step count; reached count is current + 1
    // whenever current is a valid index.
    #[test]
    fn markers_invariants(step_count in 1usize..32, current in 0usize..32) {
        let current = current % step_count;
        let markers = progress_markers(step_count, current);

        prop_assert_eq!(markers.len(), step_count);
        prop_assert_eq!(markers.iter().filter(|m| **m).count(), current + 1);

        // Reached markers form a prefix: never a gap before the current step.
        let first_unreached = markers.iter().position(|m| !*m).unwrap_or(step_count);
        prop_assert_eq!(first_unreached, current + 1);
    }
}
