//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::{ContactMailbox, SendChatMessageHandler, SubmitContactFormHandler};
use crate::ports::{AIProvider, EmailSender};

/// Shared application state containing all dependencies.
///
/// Cloned for each request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub email_sender: Arc<dyn EmailSender>,
    pub mailbox: ContactMailbox,
}

impl AppState {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        email_sender: Arc<dyn EmailSender>,
        mailbox: ContactMailbox,
    ) -> Self {
        Self {
            ai_provider,
            email_sender,
            mailbox,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn send_chat_message_handler(&self) -> SendChatMessageHandler {
        SendChatMessageHandler::new(self.ai_provider.clone())
    }

    pub fn submit_contact_form_handler(&self) -> SubmitContactFormHandler {
        SubmitContactFormHandler::new(self.email_sender.clone(), self.mailbox.clone())
    }
}

#[cfg(test)]
pub(crate) fn test_state(
    ai_provider: &crate::adapters::ai::MockAIProvider,
    email_sender: &crate::adapters::email::MockEmailSender,
) -> AppState {
    AppState::new(
        Arc::new(ai_provider.clone()),
        Arc::new(email_sender.clone()),
        ContactMailbox::new(
            "Golden Mountain <noreply@goldenmountain.tw>",
            "owner@goldenmountain.tw",
            "Golden Mountain",
        ),
    )
}
