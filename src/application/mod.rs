//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain gates and coordinates between ports.

pub mod handlers;

pub use handlers::{
    ContactMailbox, SendChatMessageCommand, SendChatMessageHandler, SubmitContactFormCommand,
    SubmitContactFormHandler,
};
