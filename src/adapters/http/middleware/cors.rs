use axum::http::{header::CONTENT_TYPE, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::origin::AllowedOrigins;

/// CORS headers for the allow-listed origins.
pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}
