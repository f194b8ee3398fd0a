//! Proxy error taxonomy.
//!
//! Every failure a request can hit collapses into one of three variants:
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidInput | 400 |
//! | UpstreamRateLimited | 429 |
//! | UpstreamFailure | 500 |
//!
//! `InvalidInput` carries the exact client-facing message. `UpstreamFailure`
//! carries a diagnostic for the logs only; clients get a fixed per-endpoint text.

use thiserror::Error;

/// Client-facing messages. These strings are part of the public API.
pub mod messages {
    pub const MESSAGES_REQUIRED: &str = "messages array is required";
    pub const INVALID_MESSAGE_FORMAT: &str = "invalid message format";
    pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";
    pub const INVALID_EMAIL: &str = "Invalid email address.";
    pub const RATE_LIMITED: &str = "Rate limit reached, please try again shortly.";
    pub const CHAT_FAILED: &str = "An error occurred while contacting the AI. Please try again.";
    pub const EMAIL_FAILED: &str = "Failed to send email.";
}

/// Errors produced while gating or proxying a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProxyError {
    /// Client-supplied data failed a shape, type or business-rule check.
    #[error("{0}")]
    InvalidInput(&'static str),

    /// The LLM provider answered 429.
    #[error("upstream rate limited")]
    UpstreamRateLimited,

    /// Any other upstream or transport failure.
    #[error("upstream failure: {0}")]
    UpstreamFailure(String),
}

impl ProxyError {
    pub fn invalid_input(message: &'static str) -> Self {
        ProxyError::InvalidInput(message)
    }

    pub fn upstream_failure(detail: impl Into<String>) -> Self {
        ProxyError::UpstreamFailure(detail.into())
    }

    /// True when the request was rejected before any outbound call.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ProxyError::InvalidInput(_))
    }
}
