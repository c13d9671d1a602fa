use hypograph_core::{Hypothesis, HypothesisStatus, HypothesisType, RoadmapState, ValidationRecord};
use hypograph_roadmap::{
    aggregate_progress, compute_roadmap_states, roadmap_steps, ProgressSummary, StatePolicy,
};
use proptest::prelude::*;

fn roadmap(rows: &[(HypothesisStatus, usize)]) -> Vec<hypograph_roadmap::RoadmapStep> {
    let mut hypotheses = Vec::new();
    let mut validations = Vec::new();
    for (i, (status, count)) in rows.iter().enumerate() {
        let h = Hypothesis::new(format!("step {}", i), HypothesisType::Solution)
            .with_status(*status)
            .with_roadmap_order(i as i64);
        for _ in 0..*count {
            validations.push(ValidationRecord::new(h.id));
        }
        hypotheses.push(h);
    }
    roadmap_steps(hypotheses, &validations)
}

// Three steps, counts [1,1,0], statuses [confirmed, verifying, unverified]:
// states [completed, inProgress, locked], 33% / 33%.
#[test]
fn status_aware_end_to_end() {
    use hypograph_core::HypothesisStatus::*;
    let steps = roadmap(&[(Confirmed, 1), (Verifying, 1), (Unverified, 0)]);
    let states = compute_roadmap_states(&steps, StatePolicy::StatusAware);
    assert_eq!(
        states,
        vec![
            RoadmapState::Completed,
            RoadmapState::InProgress,
            RoadmapState::Locked
        ]
    );

    let summary = aggregate_progress(&states);
    assert_eq!(summary.completed_percent, 33);
    assert_eq!(summary.in_progress_percent, 33);
    assert!(!summary.all_completed);
}

#[test]
fn empty_roadmap_is_well_defined() {
    let states = compute_roadmap_states(&[], StatePolicy::StatusAware);
    assert!(states.is_empty());
    assert_eq!(aggregate_progress(&states), ProgressSummary::EMPTY);
}

#[test]
fn policies_disagree_on_inconclusive_steps() {
    use hypograph_core::HypothesisStatus::*;
    let steps = roadmap(&[(Verifying, 2)]);
    assert_eq!(
        compute_roadmap_states(&steps, StatePolicy::Simple),
        vec![RoadmapState::Completed]
    );
    assert_eq!(
        compute_roadmap_states(&steps, StatePolicy::StatusAware),
        vec![RoadmapState::InProgress]
    );
}

#[test]
fn full_completion_raises_all_done() {
    use hypograph_core::HypothesisStatus::*;
    let steps = roadmap(&[(Confirmed, 1), (Refuted, 3)]);
    let states = compute_roadmap_states(&steps, StatePolicy::StatusAware);
    let summary = aggregate_progress(&states);
    assert_eq!(summary.completed_percent, 100);
    assert!(summary.all_completed);
}

fn any_state() -> impl Strategy<Value = RoadmapState> {
    prop_oneof![
        Just(RoadmapState::Locked),
        Just(RoadmapState::Current),
        Just(RoadmapState::InProgress),
        Just(RoadmapState::Completed),
        Just(RoadmapState::Skipped),
    ]
}

proptest! {
    #[test]
    fn hundred_percent_iff_all_completed(states in prop::collection::vec(any_state(), 1..300)) {
        let summary = aggregate_progress(&states);
        let all = states.iter().all(|s| *s == RoadmapState::Completed);
        prop_assert_eq!(summary.completed_percent == 100, all);
        prop_assert_eq!(summary.all_completed, all);
    }

    #[test]
    fn state_computation_is_deterministic(
        rows in prop::collection::vec(
            (
                prop_oneof![
                    Just(HypothesisStatus::Unverified),
                    Just(HypothesisStatus::Verifying),
                    Just(HypothesisStatus::Confirmed),
                    Just(HypothesisStatus::Refuted),
                ],
                0usize..4,
            ),
            0..12,
        )
    ) {
        let steps = roadmap(&rows);
        for policy in [StatePolicy::Simple, StatePolicy::StatusAware] {
            let first = compute_roadmap_states(&steps, policy);
            let second = compute_roadmap_states(&steps, policy);
            prop_assert_eq!(first.len(), steps.len());
            prop_assert_eq!(first, second);
        }
    }
}
