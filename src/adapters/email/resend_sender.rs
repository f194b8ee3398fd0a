//! Resend email adapter.
//!
//! Implements the `EmailSender` port against Resend's `POST /emails` endpoint
//! using bearer authentication.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ResendConfig::new(api_key).with_timeout(Duration::from_secs(30));
//! let sender = ResendEmailSender::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{EmailError, EmailReceipt, EmailSender, OutboundEmail};

/// Resend API configuration.
#[derive(Clone)]
pub struct ResendConfig {
    /// Resend API key (re_...).
    api_key: SecretString,

    /// Base URL for the Resend API (default: https://api.resend.com).
    api_base_url: String,

    timeout: Duration,
}

impl ResendConfig {
    /// Create a new Resend configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Resend email adapter.
pub struct ResendEmailSender {
    config: ResendConfig,
    http_client: Client,
}

impl ResendEmailSender {
    /// Create a new Resend sender with the given configuration.
    pub fn new(config: ResendConfig) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.api_base_url)
    }

    fn transport_error(&self, e: reqwest::Error) -> EmailError {
        if e.is_timeout() {
            EmailError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else {
            EmailError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, email: OutboundEmail) -> Result<EmailReceipt, EmailError> {
        let payload = ResendEmailRequest::from(&email);

        let response = self
            .http_client
            .post(self.emails_url())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ResendErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(body);

            return Err(match status.as_u16() {
                401 | 403 => EmailError::AuthenticationFailed,
                429 => EmailError::RateLimited,
                500..=599 => EmailError::Unavailable(format!("status {}: {}", status, message)),
                code => EmailError::Rejected {
                    status: code,
                    message,
                },
            });
        }

        // The id is informational; an unreadable body still counts as accepted.
        let receipt = response
            .json::<ResendEmailResponse>()
            .await
            .map(|r| EmailReceipt { id: r.id })
            .unwrap_or_default();

        tracing::debug!(email_id = ?receipt.id, "Resend accepted email");

        Ok(receipt)
    }
}

// ----- Resend API Types -----

#[derive(Debug, Serialize)]
struct ResendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    reply_to: &'a str,
    subject: &'a str,
    text: &'a str,
}

impl<'a> From<&'a OutboundEmail> for ResendEmailRequest<'a> {
    fn from(email: &'a OutboundEmail) -> Self {
        Self {
            from: &email.from,
            to: &email.to,
            reply_to: &email.reply_to,
            subject: &email.subject,
            text: &email.text,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ResendEmailResponse {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn email() -> OutboundEmail {
        OutboundEmail {
            from: "Golden Mountain <noreply@goldenmountain.tw>".to_string(),
            to: vec!["owner@goldenmountain.tw".to_string()],
            reply_to: "a@b.co".to_string(),
            subject: "[Golden Mountain] New inquiry from Ann".to_string(),
            text: "Name: Ann\nEmail: a@b.co\n\nHi".to_string(),
        }
    }

    #[test]
    fn payload_matches_resend_shape() {
        let email = email();
        let payload = serde_json::to_value(ResendEmailRequest::from(&email)).unwrap();

        assert_eq!(
            payload,
            json!({
                "from": "Golden Mountain <noreply@goldenmountain.tw>",
                "to": ["owner@goldenmountain.tw"],
                "reply_to": "a@b.co",
                "subject": "[Golden Mountain] New inquiry from Ann",
                "text": "Name: Ann\nEmail: a@b.co\n\nHi"
            })
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let sender =
            ResendEmailSender::new(ResendConfig::new("re_test").with_base_url("http://localhost:1/"))
                .unwrap();
        assert_eq!(sender.emails_url(), "http://localhost:1/emails");
    }

    #[test]
    fn default_base_url_is_resend() {
        let sender = ResendEmailSender::new(ResendConfig::new("re_test")).unwrap();
        assert_eq!(sender.emails_url(), "https://api.resend.com/emails");
    }
}
