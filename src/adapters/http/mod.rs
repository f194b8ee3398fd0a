//! HTTP adapters - REST API implementations.
//!
//! Each endpoint has its own module; `router` assembles them with the
//! shared middleware stack.

pub mod chat;
pub mod contact;
pub mod error;
pub mod health;
pub mod middleware;
mod router;
mod state;

pub use error::{ApiError, Endpoint, ErrorResponse};
pub use router::app_router;
pub use state::AppState;
