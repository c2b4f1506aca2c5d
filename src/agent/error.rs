use thiserror::Error;

use crate::template::TemplateError;

/// Errors raised while assembling an agent. A built agent never fails a run.
#[derive(Error, Debug)]
pub enum AgentError {
    /// The prompt template references variables the agent cannot provide.
    #[error("Prompt error: {0}")]
    PromptError(#[from] TemplateError),

    /// The prompt template never shows the question to the model.
    #[error("Invalid prompt template: {0}")]
    InvalidPrompt(String),
}
