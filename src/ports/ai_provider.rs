//! AI Provider Port - Interface for LLM provider integrations.
//!
//! This port abstracts the single outbound call the chat endpoint makes,
//! so the application layer can be exercised without a real LLM.
//!
//! # Design
//!
//! - Non-streaming, single-attempt completions only
//! - Provider-agnostic request built from the gated conversation
//! - Error variants for the failure modes the translator distinguishes
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoProvider;
//!
//! #[async_trait]
//! impl AIProvider for EchoProvider {
//!     async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
//!         Ok(CompletionResponse::text("Hello!"))
//!     }
//!     // ...
//! }
//! ```

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::chat::ChatTurn;

/// Port for AI/LLM provider interactions.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Generate a single completion. Implementations must not retry.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for AI completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Conversation history, oldest first.
    pub messages: Vec<ChatTurn>,
    /// System prompt to guide model behavior.
    pub system_prompt: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Creates a request with the given system prompt and token ceiling.
    pub fn new(system_prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: system_prompt.into(),
            max_tokens,
        }
    }

    /// Sets the conversation history.
    pub fn with_messages(mut self, messages: Vec<ChatTurn>) -> Self {
        self.messages = messages;
        self
    }
}

/// Response from AI completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Text of the first content block, empty if the provider sent none.
    pub content: String,
}

impl CompletionResponse {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "anthropic").
    pub name: String,
    /// Model identifier.
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// AI provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AIError {
    /// Rate limited by provider.
    #[error("rate limited")]
    RateLimited,

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider rejected the request payload.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider is unavailable or overloaded.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Provider answered with a status we do not classify.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },
}

impl AIError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Returns true if the provider answered 429.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AIError::RateLimited)
    }
}
