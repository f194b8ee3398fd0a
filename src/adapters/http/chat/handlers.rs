//! HTTP handlers for the chat endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};

use crate::application::SendChatMessageCommand;

use super::dto::{ChatRequest, ChatResponse};
use crate::adapters::http::error::{lenient_body, ApiError};
use crate::adapters::http::AppState;

/// POST /api/chat - Answer a website chat request
pub async fn send_chat_message(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let request = lenient_body(body)?;
    let locale = request.locale_tag();
    let cmd = SendChatMessageCommand::new(request.messages, locale);

    let reply = state
        .send_chat_message_handler()
        .handle(cmd)
        .await
        .map_err(ApiError::chat)?;

    Ok(Json(ChatResponse::from(reply)))
}
