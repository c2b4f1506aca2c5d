use serde::{Deserialize, Serialize};
use std::fmt;

/// Enum `MessageType` represents the role of a chat message.
///
/// # Usage
/// ```rust,ignore
/// let system_message_type = MessageType::System;
/// let human_message_type = MessageType::Human;
/// ```
#[derive(PartialEq, Eq, Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub enum MessageType {
    #[default]
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Ai,
    #[serde(rename = "user")]
    Human,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageType::System => write!(f, "system"),
            MessageType::Ai => write!(f, "ai"),
            MessageType::Human => write!(f, "human"),
        }
    }
}
