//! SubmitContactForm command handler.
//!
//! Validates a website inquiry and relays it to the business inbox as a
//! single plain-text email.

use std::sync::Arc;

use crate::config::EmailConfig;
use crate::domain::contact::ContactSubmission;
use crate::domain::ProxyError;
use crate::ports::{EmailError, EmailSender, OutboundEmail};

/// Command to submit the contact form.
#[derive(Debug, Clone, Default)]
pub struct SubmitContactFormCommand {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Fixed addressing for inquiry notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMailbox {
    /// Sender header, e.g. `Golden Mountain <noreply@goldenmountain.tw>`.
    pub from: String,
    /// Business inbox.
    pub to: String,
    /// Name used in the subject prefix.
    pub business_name: String,
}

impl ContactMailbox {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        business_name: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            business_name: business_name.into(),
        }
    }

    pub fn from_config(config: &EmailConfig) -> Self {
        Self::new(
            config.from_header(),
            config.recipient(),
            config.business_name.clone(),
        )
    }

    /// Addresses a validated submission.
    pub fn compose(&self, submission: &ContactSubmission) -> OutboundEmail {
        OutboundEmail {
            from: self.from.clone(),
            to: vec![self.to.clone()],
            reply_to: submission.email().to_string(),
            subject: submission.subject(&self.business_name),
            text: submission.body_text(),
        }
    }
}

/// Handler for contact form submissions.
pub struct SubmitContactFormHandler {
    email_sender: Arc<dyn EmailSender>,
    mailbox: ContactMailbox,
}

impl SubmitContactFormHandler {
    pub fn new(email_sender: Arc<dyn EmailSender>, mailbox: ContactMailbox) -> Self {
        Self {
            email_sender,
            mailbox,
        }
    }

    pub async fn handle(&self, cmd: SubmitContactFormCommand) -> Result<(), ProxyError> {
        let submission = ContactSubmission::new(&cmd.name, &cmd.email, &cmd.message)?;
        let email = self.mailbox.compose(&submission);

        let receipt = self
            .email_sender
            .send(email)
            .await
            .map_err(translate_email_error)?;

        tracing::info!(email_id = ?receipt.id, "Contact inquiry relayed");

        Ok(())
    }
}

/// Every delivery failure, rate limiting included, is a generic failure.
fn translate_email_error(err: EmailError) -> ProxyError {
    tracing::error!(error = %err, "Contact email delivery failed");
    ProxyError::upstream_failure(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::MockEmailSender;
    use crate::domain::errors::messages;

    fn mailbox() -> ContactMailbox {
        ContactMailbox::new(
            "Golden Mountain <noreply@goldenmountain.tw>",
            "owner@goldenmountain.tw",
            "Golden Mountain",
        )
    }

    fn handler(sender: &MockEmailSender) -> SubmitContactFormHandler {
        SubmitContactFormHandler::new(Arc::new(sender.clone()), mailbox())
    }

    fn cmd(name: &str, email: &str, message: &str) -> SubmitContactFormCommand {
        SubmitContactFormCommand {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn sends_formatted_inquiry() {
        let sender = MockEmailSender::new();

        handler(&sender)
            .handle(cmd("Ann", "a@b.co", "Hi"))
            .await
            .unwrap();

        assert_eq!(
            sender.sent(),
            vec![OutboundEmail {
                from: "Golden Mountain <noreply@goldenmountain.tw>".to_string(),
                to: vec!["owner@goldenmountain.tw".to_string()],
                reply_to: "a@b.co".to_string(),
                subject: "[Golden Mountain] New inquiry from Ann".to_string(),
                text: "Name: Ann\nEmail: a@b.co\n\nHi".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn trims_before_sending() {
        let sender = MockEmailSender::new();

        handler(&sender)
            .handle(cmd("  Ann ", " a@b.co ", "\nHi\n"))
            .await
            .unwrap();

        let sent = &sender.sent()[0];
        assert_eq!(sent.reply_to, "a@b.co");
        assert_eq!(sent.text, "Name: Ann\nEmail: a@b.co\n\nHi");
    }

    #[tokio::test]
    async fn validation_failures_skip_sender() {
        let sender = MockEmailSender::new();
        let h = handler(&sender);

        assert_eq!(
            h.handle(cmd("Ann", "a@b.co", "   ")).await,
            Err(ProxyError::invalid_input(messages::ALL_FIELDS_REQUIRED))
        );
        assert_eq!(
            h.handle(cmd("Ann", "not-an-email", "Hi")).await,
            Err(ProxyError::invalid_input(messages::INVALID_EMAIL))
        );
        assert_eq!(sender.call_count(), 0);
    }

    #[tokio::test]
    async fn rate_limit_is_a_generic_failure() {
        let sender = MockEmailSender::new().with_error(EmailError::RateLimited);

        let err = handler(&sender)
            .handle(cmd("Ann", "a@b.co", "Hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProxyError::UpstreamFailure(_)));
    }

    #[tokio::test]
    async fn rejection_is_a_generic_failure() {
        let sender = MockEmailSender::new().with_error(EmailError::Rejected {
            status: 422,
            message: "bad from".to_string(),
        });

        let err = handler(&sender)
            .handle(cmd("Ann", "a@b.co", "Hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProxyError::UpstreamFailure(_)));
        assert_eq!(sender.call_count(), 1);
    }
}
