use hypograph_core::{HypothesisId, LinkId};
use serde::{Deserialize, Serialize};

/// A directed edge between two hypotheses: `from` is the parent, `to` the
/// child. Multiple links between the same pair are parallel edges and are
/// never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HypothesisLink {
    pub id: LinkId,
    pub from: HypothesisId,
    pub to: HypothesisId,
    pub label: Option<String>,
}

impl HypothesisLink {
    pub fn new(from: HypothesisId, to: HypothesisId) -> Self {
        Self {
            id: LinkId::new_v4(),
            from,
            to,
            label: None,
        }
    }

    pub fn with_label(mut self, label: String) -> Self {
        self.label = Some(label);
        self
    }
}
