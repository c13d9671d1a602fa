use hypograph_core::{verification_counts, Hypothesis, ValidationRecord};
use serde::{Deserialize, Serialize};

/// A hypothesis placed on the roadmap: its 0-based position, the number of
/// validation records referencing it, and its validation priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub hypothesis: Hypothesis,
    pub position: usize,
    pub verification_count: usize,
    pub priority: u16,
}

impl RoadmapStep {
    pub fn new(hypothesis: Hypothesis, position: usize, verification_count: usize) -> Self {
        let priority = hypothesis.priority();
        Self {
            hypothesis,
            position,
            verification_count,
            priority,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.verification_count > 0
    }
}

/// Derives the ordered roadmap steps from a snapshot of hypotheses and
/// validation records.
///
/// Exactly the hypotheses carrying a persisted `roadmap_order` become
/// steps, sorted by that order field (a sort key, not a contiguous index;
/// gaps are fine) with `created_at` breaking ties. Positions are assigned
/// 0-based after sorting.
pub fn roadmap_steps(
    hypotheses: Vec<Hypothesis>,
    validations: &[ValidationRecord],
) -> Vec<RoadmapStep> {
    let counts = verification_counts(validations);

    let mut members: Vec<Hypothesis> = hypotheses
        .into_iter()
        .filter(|h| h.is_roadmap_member())
        .collect();
    members.sort_by_key(|h| (h.roadmap_order, h.created_at));

    members
        .into_iter()
        .enumerate()
        .map(|(position, h)| {
            let count = counts.get(&h.id).copied().unwrap_or(0);
            RoadmapStep::new(h, position, count)
        })
        .collect()
}
