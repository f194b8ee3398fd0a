//! Chat inbound gate.
//!
//! Turns the raw `messages` value posted by the website into a bounded,
//! role-checked conversation. Validation is all-or-nothing over the kept
//! window and happens before any outbound call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::locale::Locale;
use crate::domain::errors::{messages, ProxyError};

/// Number of most recent turns forwarded upstream.
pub const MAX_CONVERSATION_TURNS: usize = 20;

/// Ceiling on tokens the model may generate per reply.
pub const MAX_OUTPUT_TOKENS: u32 = 512;

/// Who authored a turn. `system` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Parses a role tag; only the exact lowercase tags are accepted.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "user" => Some(ChatRole::User),
            "assistant" => Some(ChatRole::Assistant),
            _ => None,
        }
    }
}

/// One validated turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// Reads a turn from its JSON form. Content is kept byte-for-byte.
    ///
    /// Only `role` and `content` survive; any other client field is dropped
    /// because the Messages API rejects unknown keys on a message.
    fn from_value(value: &Value) -> Option<Self> {
        let role = value.get("role").and_then(Value::as_str).and_then(ChatRole::parse)?;
        let content = value.get("content").and_then(Value::as_str)?;
        Some(Self::new(role, content))
    }
}

/// The last [`MAX_CONVERSATION_TURNS`] turns of a conversation, oldest first.
///
/// Never empty. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedConversation {
    turns: Vec<ChatTurn>,
}

impl TrimmedConversation {
    /// Builds the window from the raw `messages` value.
    ///
    /// # Errors
    ///
    /// - `messages array is required` if `raw` is not a non-empty array
    /// - `invalid message format` if any kept entry has a bad role or non-string content
    pub fn from_value(raw: &Value) -> Result<Self, ProxyError> {
        let entries = raw
            .as_array()
            .filter(|entries| !entries.is_empty())
            .ok_or(ProxyError::InvalidInput(messages::MESSAGES_REQUIRED))?;

        let start = entries.len().saturating_sub(MAX_CONVERSATION_TURNS);
        let turns = entries[start..]
            .iter()
            .map(ChatTurn::from_value)
            .collect::<Option<Vec<_>>>()
            .ok_or(ProxyError::InvalidInput(messages::INVALID_MESSAGE_FORMAT))?;

        Ok(Self { turns })
    }

    pub fn into_turns(self) -> Vec<ChatTurn> {
        self.turns
    }
}

/// A chat request that passed the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatAdmission {
    pub conversation: TrimmedConversation,
    pub locale: Locale,
}

impl ChatAdmission {
    pub fn system_prompt(&self) -> &'static str {
        self.locale.system_prompt()
    }
}

/// Runs the chat gate over a raw request.
pub fn admit_chat(messages: &Value, locale: Option<&str>) -> Result<ChatAdmission, ProxyError> {
    let conversation = TrimmedConversation::from_value(messages)?;
    Ok(ChatAdmission {
        conversation,
        locale: Locale::from_tag(locale),
    })
}

/// The assistant's answer as returned to the website.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}
