use std::time::Duration;

pub use async_openai::config::{Config, OpenAIConfig};

use async_openai::Client;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use async_trait::async_trait;
use serde_json::Value;

use crate::{
    llm::{options::CallOptions, LLMError, LLM},
    schemas::Message,
};

use super::request::ChatCompletionRequest;

pub const DEFAULT_MODEL: &str = "mistral";

const CONTENT_POINTER: &str = "/choices/0/message/content";

/// Client for any OpenAI-compatible chat completion endpoint.
#[derive(Clone)]
pub struct OpenAI<C: Config> {
    client: Client<C>,
    model: String,
    options: CallOptions,
}

impl<C: Config> OpenAI<C> {
    /// Failed requests are not retried, so an unavailable service is reported
    /// right away. See [`OpenAI::with_backoff`].
    pub fn new(config: C) -> Self {
        Self {
            client: Client::with_config(config).with_backoff(no_retry()),
            model: DEFAULT_MODEL.to_string(),
            options: CallOptions::default(),
        }
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.client = self.client.with_http_client(http_client);
        self
    }

    /// Retries 5xx and rate-limited responses with `backoff` until it gives up.
    pub fn with_backoff(mut self, backoff: ExponentialBackoff) -> Self {
        self.client = self.client.with_backoff(backoff);
        self
    }

    pub fn add_options(&mut self, options: CallOptions) {
        self.options.merge_options(options)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Default for OpenAI<OpenAIConfig> {
    fn default() -> Self {
        Self::new(OpenAIConfig::default())
    }
}

#[async_trait]
impl<C: Config + Send + Sync + 'static> LLM for OpenAI<C> {
    async fn generate(&self, messages: &[Message]) -> Result<String, LLMError> {
        let request = ChatCompletionRequest::build_request(&self.model, messages, &self.options);

        let response: Value = self.client.chat().create_byot(request).await?;

        select_content(&response)
    }
}

fn no_retry() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

fn select_content(response: &Value) -> Result<String, LLMError> {
    response
        .pointer(CONTENT_POINTER)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| LLMError::ContentNotFound(CONTENT_POINTER.into()))
}
