//! HTTP middleware for axum.
//!
//! - `origin` - Origin allow-list guard
//! - `cors` - CORS response headers for the same allow-list

pub mod cors;
pub mod origin;

pub use cors::cors_layer;
pub use origin::{origin_guard, AllowedOrigins, ORIGIN_NOT_ALLOWED};
