//! Email sender port for transactional mail delivery.
//!
//! Defines the contract for the email provider (e.g., Resend) used by the
//! contact form. One call per submission, no retries.

use async_trait::async_trait;

/// Port for transactional email delivery.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send a single plain-text email.
    async fn send(&self, email: OutboundEmail) -> Result<EmailReceipt, EmailError>;
}

/// A fully addressed plain-text email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Sender, e.g. `Golden Mountain <noreply@goldenmountain.tw>`.
    pub from: String,
    /// Recipients.
    pub to: Vec<String>,
    /// Address replies go to.
    pub reply_to: String,
    pub subject: String,
    /// Plain-text body.
    pub text: String,
}

/// Provider acknowledgement of an accepted email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailReceipt {
    /// Provider message ID, if returned.
    pub id: Option<String>,
}

/// Email provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by provider.
    #[error("rate limited")]
    RateLimited,

    /// Provider refused the message.
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Provider is unavailable.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}
