//! SendChatMessage command handler.
//!
//! Gates a website chat request, forwards the trimmed conversation to the
//! LLM provider exactly once, and returns the assistant's reply.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::chat::{admit_chat, ChatReply, MAX_OUTPUT_TOKENS};
use crate::domain::ProxyError;
use crate::ports::{AIError, AIProvider, CompletionRequest};

/// Command to answer a website chat request.
#[derive(Debug, Clone, Default)]
pub struct SendChatMessageCommand {
    /// Raw `messages` value from the request body.
    pub messages: Value,
    /// Locale tag; only `"en"` selects the English persona.
    pub locale: Option<String>,
}

impl SendChatMessageCommand {
    pub fn new(messages: Value, locale: Option<String>) -> Self {
        Self { messages, locale }
    }
}

/// Handler for website chat requests.
pub struct SendChatMessageHandler {
    ai_provider: Arc<dyn AIProvider>,
}

impl SendChatMessageHandler {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    pub async fn handle(&self, cmd: SendChatMessageCommand) -> Result<ChatReply, ProxyError> {
        // 1. Gate: nothing reaches the provider unless the whole request passes
        let admission = admit_chat(&cmd.messages, cmd.locale.as_deref())?;

        // 2. Build the completion request
        let request = CompletionRequest::new(admission.system_prompt(), MAX_OUTPUT_TOKENS)
            .with_messages(admission.conversation.into_turns());

        let info = self.ai_provider.provider_info();
        tracing::debug!(
            turns = request.messages.len(),
            locale = ?admission.locale,
            provider = %info.name,
            model = %info.model,
            "Forwarding chat to provider"
        );

        // 3. Single outbound call
        let completion = self
            .ai_provider
            .complete(request)
            .await
            .map_err(translate_ai_error)?;

        Ok(ChatReply::new(completion.content))
    }
}

/// Classifies a provider failure, logging the detail that is never sent
/// to the client.
fn translate_ai_error(err: AIError) -> ProxyError {
    if err.is_rate_limited() {
        tracing::warn!(error = %err, "Chat provider rate limited");
        ProxyError::UpstreamRateLimited
    } else {
        tracing::error!(error = %err, "Chat provider call failed");
        ProxyError::upstream_failure(err.to_string())
    }
}
