use crate::{output_parser::ParsedAction, schemas::Step};

/// The ordered, append-only record of an agent's steps.
///
/// Actions can only be recorded together with their observation, so an
/// `Action` step is always immediately followed by its `Observation`.
#[derive(Debug, Clone, Default)]
pub struct History {
    steps: Vec<Step>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The last `n` steps, or all of them if there are fewer.
    pub fn recent(&self, n: usize) -> &[Step] {
        &self.steps[self.steps.len().saturating_sub(n)..]
    }

    pub fn last_observation(&self) -> Option<&str> {
        self.steps.iter().rev().find_map(|step| match step {
            Step::Observation(observation) => Some(observation.as_str()),
            _ => None,
        })
    }

    pub(crate) fn push_thought(&mut self, thought: String) {
        self.steps.push(Step::Thought(thought));
    }

    pub(crate) fn push_action(&mut self, action: &ParsedAction, observation: String) {
        self.steps.push(Step::Action(action.to_string()));
        self.steps.push(Step::Observation(observation));
    }

    pub(crate) fn push_answer(&mut self, answer: String) {
        self.steps.push(Step::Answer(answer));
    }

    pub(crate) fn clear(&mut self) {
        self.steps.clear();
    }
}
