use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub type HypothesisId = Uuid;
pub type LinkId = Uuid;
pub type ValidationId = Uuid;

/// Lifecycle status of a hypothesis, as persisted by the editing flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisStatus {
    Unverified,
    Verifying,
    Confirmed,
    Refuted,
}

impl HypothesisStatus {
    /// A concluded hypothesis has a definitive outcome, positive or negative.
    pub fn is_concluded(&self) -> bool {
        matches!(self, HypothesisStatus::Confirmed | HypothesisStatus::Refuted)
    }
}

impl fmt::Display for HypothesisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HypothesisStatus::Unverified => "unverified",
            HypothesisStatus::Verifying => "verifying",
            HypothesisStatus::Confirmed => "confirmed",
            HypothesisStatus::Refuted => "refuted",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for HypothesisStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unverified" => Ok(HypothesisStatus::Unverified),
            "verifying" => Ok(HypothesisStatus::Verifying),
            "confirmed" => Ok(HypothesisStatus::Confirmed),
            "refuted" => Ok(HypothesisStatus::Refuted),
            other => Err(format!("unknown hypothesis status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisType {
    Problem,
    Solution,
    Market,
    Revenue,
    Other(String),
}

impl fmt::Display for HypothesisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HypothesisType::Problem => "problem",
            HypothesisType::Solution => "solution",
            HypothesisType::Market => "market",
            HypothesisType::Revenue => "revenue",
            HypothesisType::Other(s) => s.as_str(),
        };
        write!(f, "{}", s)
    }
}

impl FromStr for HypothesisType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "problem" => Ok(HypothesisType::Problem),
            "solution" => Ok(HypothesisType::Solution),
            "market" => Ok(HypothesisType::Market),
            "revenue" => Ok(HypothesisType::Revenue),
            other => Ok(HypothesisType::Other(other.to_string())),
        }
    }
}

/// Derived lifecycle state of one roadmap step. Never persisted; recomputed
/// on every read from status, verification count and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoadmapState {
    Locked,
    Current,
    InProgress,
    Completed,
    Skipped,
}

impl fmt::Display for RoadmapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoadmapState::Locked => "locked",
            RoadmapState::Current => "current",
            RoadmapState::InProgress => "inProgress",
            RoadmapState::Completed => "completed",
            RoadmapState::Skipped => "skipped",
        };
        write!(f, "{}", s)
    }
}
