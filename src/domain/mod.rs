//! Domain layer containing the request gates and error taxonomy.
//!
//! # Module Organization
//!
//! - `chat` - Conversation window, role whitelist, locale prompts
//! - `contact` - Contact form validation and inquiry formatting
//! - `errors` - `ProxyError` and the client-facing messages

pub mod chat;
pub mod contact;
pub mod errors;

pub use errors::ProxyError;
