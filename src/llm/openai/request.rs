use serde::Serialize;

use crate::{llm::options::CallOptions, schemas::Message};

/// Body of `POST {api_base}/chat/completions`.
#[derive(Debug, Serialize)]
pub(super) struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl<'a> ChatCompletionRequest<'a> {
    pub(super) fn build_request(
        model: &'a str,
        messages: &'a [Message],
        options: &CallOptions,
    ) -> Self {
        Self {
            model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_body() {
        let messages = [Message::new_human_message("hola")];
        let request =
            ChatCompletionRequest::build_request("mistral", &messages, &CallOptions::default());

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "mistral",
                "messages": [{ "role": "user", "content": "hola" }],
                "temperature": 0.7f32,
                "max_tokens": 500
            })
        );
    }

    #[test]
    fn test_request_body_without_options() {
        let messages = [Message::new_human_message("hola")];
        let request =
            ChatCompletionRequest::build_request("mistral", &messages, &CallOptions::unset());

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "mistral",
                "messages": [{ "role": "user", "content": "hola" }]
            })
        );
    }
}
