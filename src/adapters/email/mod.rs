//! Email Sender Adapters.
//!
//! - `ResendEmailSender` - Resend transactional email API
//! - `MockEmailSender` - Recording mock for testing

mod mock_sender;
mod resend_sender;

pub use mock_sender::MockEmailSender;
pub use resend_sender::{ResendConfig, ResendEmailSender};
