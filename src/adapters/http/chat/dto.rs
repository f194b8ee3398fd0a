//! Request and response types for the chat endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::chat::ChatReply;

/// Body of `POST /api/chat`.
///
/// Fields stay untyped so the gate, not the deserializer, decides what is
/// acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Value,
    #[serde(default)]
    pub locale: Option<Value>,
}

impl ChatRequest {
    /// Locale tag if it was sent as a string.
    pub fn locale_tag(&self) -> Option<String> {
        self.locale
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Successful chat response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self { reply: reply.reply }
    }
}
