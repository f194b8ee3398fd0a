//! Origin allow-list middleware.
//!
//! Browsers attach `Origin` to cross-site requests. A request whose origin
//! is not allow-listed is refused before it reaches any handler. Requests
//! without the header (curl, server-to-server) pass through.
//!
//! # Example
//!
//! ```ignore
//! let origins = AllowedOrigins::new(["http://localhost:5173"]);
//!
//! let app = Router::new()
//!     .route("/api/chat", post(handler))
//!     .layer(middleware::from_fn_with_state(origins, origin_guard));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::ORIGIN, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;

/// Message returned for a blocked origin.
pub const ORIGIN_NOT_ALLOWED: &str = "Origin not allowed.";

/// Origins permitted to call the API.
#[derive(Debug, Clone)]
pub struct AllowedOrigins(Arc<[HeaderValue]>);

impl AllowedOrigins {
    /// Builds the list, skipping entries that are not valid header values.
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list: Vec<HeaderValue> = origins
            .into_iter()
            .filter_map(|origin| HeaderValue::from_str(origin.as_ref().trim()).ok())
            .collect();
        Self(list.into())
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderValue> {
        self.0.iter()
    }
}

/// Rejects requests from origins outside the allow-list with 403.
pub async fn origin_guard(
    State(allowed): State<AllowedOrigins>,
    request: Request,
    next: Next,
) -> Response {
    match request.headers().get(ORIGIN) {
        Some(origin) if !allowed.contains(origin) => {
            tracing::warn!(origin = ?origin, "Blocked request from disallowed origin");
            (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse::new(ORIGIN_NOT_ALLOWED)),
            )
                .into_response()
        }
        _ => next.run(request).await,
    }
}
