//! Axum router configuration for the contact endpoint.

use axum::{routing::post, Router};

use super::handlers::submit_contact_form;
use crate::adapters::http::AppState;

/// Create the contact router.
///
/// # Routes
/// - `POST /api/contact` - Submit `{ name, email, message }`, receive `{ ok: true }`
/// - `POST /contact` - Alias
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/api/contact", post(submit_contact_form))
        .route("/contact", post(submit_contact_form))
}
