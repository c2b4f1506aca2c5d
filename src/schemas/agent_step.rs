use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a [`Step`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Thought,
    Action,
    Observation,
    Answer,
}

impl StepKind {
    /// Lowercase name, as used in serialized history.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Thought => "thought",
            StepKind::Action => "action",
            StepKind::Observation => "observation",
            StepKind::Answer => "answer",
        }
    }

    /// Capitalized name, as used when rendering the rolling context.
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Thought => "Thought",
            StepKind::Action => "Action",
            StepKind::Observation => "Observation",
            StepKind::Answer => "Answer",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One atomic entry of an agent's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Free-text reasoning extracted from the model output.
    Thought(String),
    /// A tool invocation, serialized as `name[input]`.
    Action(String),
    /// The text returned by the tool invoked in the preceding action.
    Observation(String),
    /// The final answer of a run. Always the last step of that run.
    Answer(String),
}

impl Step {
    pub fn kind(&self) -> StepKind {
        match self {
            Step::Thought(_) => StepKind::Thought,
            Step::Action(_) => StepKind::Action,
            Step::Observation(_) => StepKind::Observation,
            Step::Answer(_) => StepKind::Answer,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Step::Thought(content)
            | Step::Action(content)
            | Step::Observation(content)
            | Step::Answer(content) => content,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind().label(), self.content())
    }
}
