use async_openai::config::{Config, OpenAIConfig};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};

/// [`OpenAIConfig`] for self-hosted endpoints that may run without a key.
///
/// With an empty API key no `Authorization` header is sent at all.
#[derive(Clone, Debug)]
pub struct ChatConfig {
    inner: OpenAIConfig,
}

impl ChatConfig {
    pub fn new() -> Self {
        Self::from(OpenAIConfig::new().with_api_key(""))
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.inner = self.inner.with_api_key(api_key);
        self
    }

    pub fn with_api_base<S: Into<String>>(mut self, api_base: S) -> Self {
        self.inner = self.inner.with_api_base(api_base);
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<OpenAIConfig> for ChatConfig {
    fn from(inner: OpenAIConfig) -> Self {
        Self { inner }
    }
}

impl Config for ChatConfig {
    fn headers(&self) -> HeaderMap {
        let mut headers = self.inner.headers();
        if self.api_key().expose_secret().is_empty() {
            headers.remove(AUTHORIZATION);
        }
        headers
    }

    fn url(&self, path: &str) -> String {
        self.inner.url(path)
    }

    fn query(&self) -> Vec<(&str, &str)> {
        self.inner.query()
    }

    fn api_base(&self) -> &str {
        self.inner.api_base()
    }

    fn api_key(&self) -> &SecretString {
        self.inner.api_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        llm::{openai::OpenAI, LLM},
        schemas::Message,
    };

    #[test]
    fn test_headers() {
        assert!(ChatConfig::new().headers().get(AUTHORIZATION).is_none());
        assert_eq!(
            ChatConfig::new()
                .with_api_key("secret")
                .headers()
                .get(AUTHORIZATION)
                .unwrap(),
            "Bearer secret"
        );
    }

    #[tokio::test]
    async fn test_request_without_key_has_no_authorization() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "hi"}}]}"#)
            .create_async()
            .await;

        let llm = OpenAI::new(ChatConfig::new().with_api_base(server.url()));
        let response = llm
            .generate(&[Message::new_human_message("hola")])
            .await
            .unwrap();

        assert_eq!(response, "hi");
        mock.assert_async().await;
    }
}
