//! Top-level router: endpoint routes plus the cross-cutting layers.
//!
//! Layers, outermost first: request id assignment, tracing span, request id
//! propagation, CORS headers, origin guard, body size limit.

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{HeaderName, Request},
    middleware, Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;

use super::chat::chat_routes;
use super::contact::contact_routes;
use super::health::health_routes;
use super::middleware::{cors_layer, origin_guard, AllowedOrigins};
use super::AppState;
use crate::config::ServerConfig;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the complete application router.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    let origins = AllowedOrigins::new(server.cors_origins_list());
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(chat_routes())
        .merge(contact_routes())
        .merge(health_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(middleware::from_fn_with_state(origins.clone(), origin_guard))
        .layer(cors_layer(&origins))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        }))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}
