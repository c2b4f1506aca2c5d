use serde::{Deserialize, Serialize};

use super::{Step, StepKind};

/// A `{kind, content}` pair of a [`RunResult`] history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub content: String,
}

impl From<&Step> for HistoryEntry {
    fn from(step: &Step) -> Self {
        Self {
            kind: step.kind(),
            content: step.content().to_string(),
        }
    }
}

/// Outcome of a single agent run.
///
/// `history` is a snapshot of the agent's whole history at the end of the run,
/// including steps left over from earlier runs that were not reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub answer: String,
    pub history: Vec<HistoryEntry>,
}

impl RunResult {
    pub fn new(answer: impl Into<String>, steps: &[Step]) -> Self {
        Self {
            answer: answer.into(),
            history: steps.iter().map(HistoryEntry::from).collect(),
        }
    }
}
