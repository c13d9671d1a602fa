use crate::{HypothesisId, ValidationId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One validation (verification attempt) recorded against a hypothesis.
///
/// Only `hypothesis_id` and presence matter to the roadmap core; the free
/// text outcome is carried for the reporting layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub id: ValidationId,
    pub hypothesis_id: HypothesisId,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub result: Option<String>,
}

impl ValidationRecord {
    pub fn new(hypothesis_id: HypothesisId) -> Self {
        Self {
            id: ValidationId::new_v4(),
            hypothesis_id,
            created_at: chrono::Utc::now(),
            result: None,
        }
    }

    pub fn with_result(mut self, result: String) -> Self {
        self.result = Some(result);
        self
    }
}

/// Folds validation records into a per-hypothesis verification count.
pub fn verification_counts(
    validations: &[ValidationRecord],
) -> HashMap<HypothesisId, usize> {
    let mut counts = HashMap::new();
    for v in validations {
        *counts.entry(v.hypothesis_id).or_insert(0) += 1;
    }
    counts
}
