//! Chat HTTP adapter.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::send_chat_message;
pub use routes::chat_routes;
