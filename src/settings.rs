use secrecy::{ExposeSecret, SecretString};

use crate::{
    agent::DEFAULT_MAX_STEPS,
    llm::openai::{ChatConfig, OpenAI, DEFAULT_MODEL},
    tools::{ToolError, TodoClient, DEFAULT_TODO_API_URL},
};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/v1";

/// Runtime configuration, usually read from the environment.
///
/// | Variable          | Default                    |
/// |-------------------|----------------------------|
/// | `API_KEY`         | none                       |
/// | `LLM_API_BASE`    | `http://localhost:8000/v1` |
/// | `LLM_MODEL`       | `mistral`                  |
/// | `TODO_API_URL`    | `http://localhost:5001`    |
/// | `AGENT_MAX_STEPS` | `10`                       |
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<SecretString>,
    pub api_base: String,
    pub model: String,
    pub todo_api_url: String,
    pub max_steps: usize,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let max_steps = match get("AGENT_MAX_STEPS").map(|v| v.trim().parse::<usize>()) {
            Some(Ok(max_steps)) => max_steps,
            Some(Err(e)) => {
                log::warn!("Ignoring invalid AGENT_MAX_STEPS: {e}");
                defaults.max_steps
            }
            None => defaults.max_steps,
        };

        Self {
            api_key: get("API_KEY").map(SecretString::from),
            api_base: get("LLM_API_BASE").unwrap_or(defaults.api_base),
            model: get("LLM_MODEL").unwrap_or(defaults.model),
            todo_api_url: get("TODO_API_URL").unwrap_or(defaults.todo_api_url),
            max_steps,
        }
    }

    /// Without `API_KEY` requests carry no `Authorization` header.
    pub fn chat_config(&self) -> ChatConfig {
        let config = ChatConfig::new().with_api_base(&self.api_base);
        match &self.api_key {
            Some(api_key) => config.with_api_key(api_key.expose_secret()),
            None => config,
        }
    }

    pub fn llm(&self) -> OpenAI<ChatConfig> {
        OpenAI::new(self.chat_config()).with_model(&self.model)
    }

    pub fn todo_client(&self) -> Result<TodoClient, ToolError> {
        TodoClient::new(&self.todo_api_url)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.into(),
            model: DEFAULT_MODEL.into(),
            todo_api_url: DEFAULT_TODO_API_URL.into(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}
