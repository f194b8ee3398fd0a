//! HTTP handlers for the contact endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};

use crate::application::SubmitContactFormCommand;

use super::dto::{ContactRequest, ContactResponse};
use crate::adapters::http::error::{lenient_body, ApiError};
use crate::adapters::http::AppState;

/// POST /api/contact - Relay a website inquiry to the business inbox
pub async fn submit_contact_form(
    State(state): State<AppState>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let cmd = SubmitContactFormCommand::from(lenient_body(body)?);

    state
        .submit_contact_form_handler()
        .handle(cmd)
        .await
        .map_err(ApiError::contact)?;

    Ok(Json(ContactResponse::ok()))
}
