//! HTTP error translation.
//!
//! Every failure leaves the service as `{ "error": "<message>" }` with one of
//! a small fixed set of statuses. Upstream details never reach the client.

use axum::extract::rejection::JsonRejection;
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::errors::messages;
use crate::domain::ProxyError;

/// Error body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Endpoint a failure is reported for; selects the generic 500 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Chat,
    Contact,
}

impl Endpoint {
    /// Message sent for any upstream failure on this endpoint.
    pub fn failure_message(self) -> &'static str {
        match self {
            Endpoint::Chat => messages::CHAT_FAILED,
            Endpoint::Contact => messages::EMAIL_FAILED,
        }
    }
}

/// Maps a proxy outcome to the client-visible status and message.
///
/// Only the chat endpoint surfaces rate limiting; on contact it collapses
/// into the generic failure.
pub fn translate(endpoint: Endpoint, error: &ProxyError) -> (StatusCode, &'static str) {
    match (endpoint, error) {
        (_, ProxyError::InvalidInput(message)) => (StatusCode::BAD_REQUEST, *message),
        (Endpoint::Chat, ProxyError::UpstreamRateLimited) => {
            (StatusCode::TOO_MANY_REQUESTS, messages::RATE_LIMITED)
        }
        (_, ProxyError::UpstreamRateLimited | ProxyError::UpstreamFailure(_)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, endpoint.failure_message())
        }
    }
}

/// API error type that converts proxy errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// A gate or upstream failure on a proxy endpoint.
    Proxy(Endpoint, ProxyError),
    /// Body could not be buffered (e.g. over the size limit).
    Body(JsonRejection),
}

impl ApiError {
    pub fn chat(err: ProxyError) -> Self {
        ApiError::Proxy(Endpoint::Chat, err)
    }

    pub fn contact(err: ProxyError) -> Self {
        ApiError::Proxy(Endpoint::Contact, err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Proxy(endpoint, err) => {
                if err.is_client_error() {
                    tracing::debug!(?endpoint, error = %err, "Request rejected by gate");
                }
                let (status, message) = translate(endpoint, &err);
                (status, Json(ErrorResponse::new(message))).into_response()
            }
            ApiError::Body(rejection) => {
                tracing::debug!(status = %rejection.status(), "Request body rejected");
                rejection.into_response()
            }
        }
    }
}

/// Unwraps a JSON body, treating anything unparseable as an empty body.
///
/// Only rejections caused by buffering the body (such as 413) are kept as
/// errors.
pub fn lenient_body<T: Default>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            Err(ApiError::Body(rejection))
        }
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Unparseable body treated as empty");
            Ok(T::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn invalid_input_is_400_with_its_message() {
        for endpoint in [Endpoint::Chat, Endpoint::Contact] {
            assert_eq!(
                translate(endpoint, &ProxyError::invalid_input(messages::INVALID_EMAIL)),
                (StatusCode::BAD_REQUEST, messages::INVALID_EMAIL)
            );
        }
    }

    #[test]
    fn chat_rate_limit_is_429() {
        assert_eq!(
            translate(Endpoint::Chat, &ProxyError::UpstreamRateLimited),
            (StatusCode::TOO_MANY_REQUESTS, messages::RATE_LIMITED)
        );
    }

    #[test]
    fn contact_rate_limit_is_500() {
        assert_eq!(
            translate(Endpoint::Contact, &ProxyError::UpstreamRateLimited),
            (StatusCode::INTERNAL_SERVER_ERROR, messages::EMAIL_FAILED)
        );
    }

    #[test]
    fn upstream_failure_uses_endpoint_message() {
        let err = ProxyError::upstream_failure("status 503: overloaded");
        assert_eq!(
            translate(Endpoint::Chat, &err),
            (StatusCode::INTERNAL_SERVER_ERROR, messages::CHAT_FAILED)
        );
        assert_eq!(
            translate(Endpoint::Contact, &err),
            (StatusCode::INTERNAL_SERVER_ERROR, messages::EMAIL_FAILED)
        );
    }

    #[tokio::test]
    async fn response_hides_upstream_detail() {
        let response =
            ApiError::chat(ProxyError::upstream_failure("secret upstream body")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await, ErrorResponse::new(messages::CHAT_FAILED));
    }

    #[tokio::test]
    async fn rate_limit_response_body_is_exact() {
        let response = ApiError::chat(ProxyError::UpstreamRateLimited).into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            &bytes[..],
            br#"{"error":"Rate limit reached, please try again shortly."}"#
        );
    }
}
