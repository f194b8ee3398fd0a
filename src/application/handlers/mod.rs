//! Application handlers.
//!
//! Command handlers that run the request gates and make the single
//! outbound call for each endpoint.

pub mod chat;
pub mod contact;

pub use chat::{SendChatMessageCommand, SendChatMessageHandler};
pub use contact::{ContactMailbox, SubmitContactFormCommand, SubmitContactFormHandler};
