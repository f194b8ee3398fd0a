//! Mock email sender for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{EmailError, EmailReceipt, EmailSender, OutboundEmail};

/// Records sent emails and replays queued failures.
///
/// With nothing queued, every send succeeds.
#[derive(Debug, Clone, Default)]
pub struct MockEmailSender {
    failures: Arc<Mutex<VecDeque<EmailError>>>,
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an error for the next send.
    pub fn with_error(self, error: EmailError) -> Self {
        self.failures.lock().unwrap().push_back(error);
        self
    }

    /// Returns the number of send attempts.
    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Returns every email handed to the sender.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, email: OutboundEmail) -> Result<EmailReceipt, EmailError> {
        self.sent.lock().unwrap().push(email);

        match self.failures.lock().unwrap().pop_front() {
            Some(err) => Err(err),
            None => Ok(EmailReceipt {
                id: Some(format!("mock-{}", self.call_count())),
            }),
        }
    }
}
