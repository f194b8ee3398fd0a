//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the third-party services it proxies to.
//!
//! - `AIProvider` - LLM completion (chat endpoint)
//! - `EmailSender` - Transactional email delivery (contact endpoint)

mod ai_provider;
mod email_sender;

pub use ai_provider::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};
pub use email_sender::{EmailError, EmailReceipt, EmailSender, OutboundEmail};
