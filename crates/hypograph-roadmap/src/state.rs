use crate::RoadmapStep;
use hypograph_core::RoadmapState;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Which state derivation the caller wants. The two policies disagree on
/// steps that were validated but never reached a concluded status, so the
/// choice is explicit; there is no default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatePolicy {
    /// Verification count alone decides completion.
    Simple,
    /// Completion additionally requires a concluded (confirmed/refuted)
    /// status; attempted-but-inconclusive steps surface as `InProgress`.
    StatusAware,
}

/// Computes one lifecycle state per step under the selected policy.
///
/// Deterministic in (order, status, verification count). Empty input yields
/// an empty state list; when no step has any verification the whole roadmap
/// is still locked.
pub fn compute_roadmap_states(steps: &[RoadmapStep], policy: StatePolicy) -> Vec<RoadmapState> {
    let states = match policy {
        StatePolicy::Simple => simple_states(steps),
        StatePolicy::StatusAware => status_aware_states(steps),
    };
    trace!(steps = steps.len(), ?policy, "computed roadmap states");
    states
}

/// Simple policy: any verified step is completed; the step after the last
/// completed one is current; unverified steps sitting between completed
/// ones are skipped; the rest is locked.
pub fn simple_states(steps: &[RoadmapStep]) -> Vec<RoadmapState> {
    if steps.is_empty() {
        return Vec::new();
    }

    let last_completed = steps.iter().rposition(|s| s.is_verified());
    let Some(last) = last_completed else {
        return vec![RoadmapState::Locked; steps.len()];
    };
    let current = last + 1;

    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            if step.is_verified() {
                RoadmapState::Completed
            } else if i < last {
                RoadmapState::Skipped
            } else if i == current {
                RoadmapState::Current
            } else {
                RoadmapState::Locked
            }
        })
        .collect()
}

/// Status-aware policy: a step is completed only when its status is
/// concluded and it has at least one verification; a verified step with an
/// unconcluded status is in progress. The current slot sits immediately
/// after the last completed step (clamped to the last index); while that
/// slot is occupied by an in-progress step, everything beyond it stays
/// locked.
pub fn status_aware_states(steps: &[RoadmapStep]) -> Vec<RoadmapState> {
    if steps.is_empty() {
        return Vec::new();
    }
    if steps.iter().all(|s| !s.is_verified()) {
        return vec![RoadmapState::Locked; steps.len()];
    }

    let completed: Vec<bool> = steps
        .iter()
        .map(|s| s.is_verified() && s.hypothesis.status.is_concluded())
        .collect();

    let pointer = completed
        .iter()
        .rposition(|&c| c)
        .map(|last| (last + 1).min(steps.len() - 1))
        .unwrap_or(0);

    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            if completed[i] {
                RoadmapState::Completed
            } else if step.is_verified() {
                RoadmapState::InProgress
            } else if i < pointer {
                RoadmapState::Skipped
            } else if i == pointer {
                RoadmapState::Current
            } else {
                RoadmapState::Locked
            }
        })
        .collect()
}
