//! Axum router configuration for the chat endpoint.

use axum::{routing::post, Router};

use super::handlers::send_chat_message;
use crate::adapters::http::AppState;

/// Create the chat router.
///
/// # Routes
/// - `POST /api/chat` - Send the conversation, receive `{ reply }`
/// - `POST /chat` - Alias
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/api/chat", post(send_chat_message))
        .route("/chat", post(send_chat_message))
}
