use async_trait::async_trait;

use crate::{llm::LLMError, schemas::Message};

/// A text-completion service.
#[async_trait]
pub trait LLM: Send + Sync {
    /// Sends the conversation and returns the assistant text.
    async fn generate(&self, messages: &[Message]) -> Result<String, LLMError>;

    /// Like [`LLM::generate`], but every failure is logged and turned into an
    /// empty string, so callers only ever see text.
    async fn complete(&self, messages: &[Message]) -> String {
        match self.generate(messages).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Error calling LLM: {e}");
                String::new()
            }
        }
    }
}

impl<L> From<L> for Box<dyn LLM>
where
    L: 'static + LLM,
{
    fn from(llm: L) -> Self {
        Box::new(llm)
    }
}
