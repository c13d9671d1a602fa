use hypograph_core::RoadmapState;
use serde::{Deserialize, Serialize};

/// Overall roadmap progress derived from per-step states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub completed_percent: u8,
    pub in_progress_percent: u8,
    pub all_completed: bool,
}

impl ProgressSummary {
    pub const EMPTY: ProgressSummary = ProgressSummary {
        completed_percent: 0,
        in_progress_percent: 0,
        all_completed: false,
    };
}

/// Rounded percentage.
fn percent(count: usize, total: usize) -> u8 {
    (count as f64 / total as f64 * 100.0).round() as u8
}

/// Rounded percentage that reaches 100 only when `count == total`.
fn capped_percent(count: usize, total: usize) -> u8 {
    if count == total {
        return 100;
    }
    percent(count, total).min(99)
}

/// Summarizes per-step states into completion percentages.
///
/// `completed_percent` is exactly 100 iff every step is completed; an empty
/// state list is the well-defined "no roadmap" result. Under the simple
/// policy no step is ever `InProgress`, so `in_progress_percent` stays 0.
pub fn aggregate_progress(states: &[RoadmapState]) -> ProgressSummary {
    let total = states.len();
    if total == 0 {
        return ProgressSummary::EMPTY;
    }

    let completed = states
        .iter()
        .filter(|s| **s == RoadmapState::Completed)
        .count();
    let in_progress = states
        .iter()
        .filter(|s| **s == RoadmapState::InProgress)
        .count();

    ProgressSummary {
        completed_percent: capped_percent(completed, total),
        in_progress_percent: percent(in_progress, total),
        all_completed: completed == total,
    }
}
