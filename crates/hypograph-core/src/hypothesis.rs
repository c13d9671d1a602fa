use crate::{HypothesisId, HypothesisStatus, HypothesisType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One hypothesis record as supplied by the persistence collaborator.
///
/// Immutable for the purposes of this core: the graph and roadmap layers
/// read it, only external editing flows mutate it. Numeric scores are
/// validated (clamped to 1..=5) at the ingestion boundary before they
/// reach this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: HypothesisId,
    pub title: String,
    pub assumption: String,
    pub expected_effect: String,
    pub hypothesis_type: HypothesisType,
    pub status: HypothesisStatus,
    pub impact: u8,
    pub uncertainty: u8,
    pub confidence: u8,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub roadmap_order: Option<i64>,
    pub roadmap_tag: Option<String>,
}

impl Hypothesis {
    pub fn new(title: String, hypothesis_type: HypothesisType) -> Self {
        Self {
            id: HypothesisId::new_v4(),
            title,
            assumption: String::new(),
            expected_effect: String::new(),
            hypothesis_type,
            status: HypothesisStatus::Unverified,
            impact: 3,
            uncertainty: 3,
            confidence: 3,
            created_at: chrono::Utc::now(),
            roadmap_order: None,
            roadmap_tag: None,
        }
    }

    pub fn with_assumption(mut self, assumption: String) -> Self {
        self.assumption = assumption;
        self
    }

    pub fn with_expected_effect(mut self, expected_effect: String) -> Self {
        self.expected_effect = expected_effect;
        self
    }

    pub fn with_status(mut self, status: HypothesisStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_scores(mut self, impact: u8, uncertainty: u8, confidence: u8) -> Self {
        self.impact = impact;
        self.uncertainty = uncertainty;
        self.confidence = confidence;
        self
    }

    pub fn with_roadmap_order(mut self, order: i64) -> Self {
        self.roadmap_order = Some(order);
        self
    }

    pub fn with_roadmap_tag(mut self, tag: String) -> Self {
        self.roadmap_tag = Some(tag);
        self
    }

    /// Validation priority: high-impact, high-uncertainty hypotheses first.
    pub fn priority(&self) -> u16 {
        self.impact as u16 * self.uncertainty as u16
    }

    /// A hypothesis belongs to the roadmap iff it carries a persisted order.
    pub fn is_roadmap_member(&self) -> bool {
        self.roadmap_order.is_some()
    }
}

/// Per-status tally across a set of hypotheses, for dashboard breakdowns.
pub fn status_counts(hypotheses: &[Hypothesis]) -> HashMap<HypothesisStatus, usize> {
    let mut counts = HashMap::new();
    for h in hypotheses {
        *counts.entry(h.status).or_insert(0) += 1;
    }
    counts
}
