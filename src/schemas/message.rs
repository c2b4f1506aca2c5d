use std::fmt;

use serde::{Deserialize, Serialize};

use super::MessageType;

/// A single `{role, content}` pair sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "role")]
    pub message_type: MessageType,
    pub content: String,
}

impl Message {
    pub fn new(message_type: MessageType, content: impl Into<String>) -> Self {
        Self {
            message_type,
            content: content.into(),
        }
    }

    pub fn new_system_message(content: impl Into<String>) -> Self {
        Self::new(MessageType::System, content)
    }

    pub fn new_human_message(content: impl Into<String>) -> Self {
        Self::new(MessageType::Human, content)
    }

    pub fn new_ai_message(content: impl Into<String>) -> Self {
        Self::new(MessageType::Ai, content)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message_type, self.content)
    }
}
