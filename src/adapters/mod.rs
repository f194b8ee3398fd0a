//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - LLM providers (Anthropic, mock)
//! - `email` - Transactional email (Resend, mock)
//! - `http` - Axum routes, middleware and error translation

pub mod ai;
pub mod email;
pub mod http;
