pub const DEFAULT_MAX_STEPS: usize = 10;

#[derive(Debug, Clone)]
pub struct AgentOptions {
    pub max_steps: usize,
}

impl AgentOptions {
    pub fn new(max_steps: usize) -> Self {
        Self { max_steps }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}
