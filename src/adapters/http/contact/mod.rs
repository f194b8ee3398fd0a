//! Contact form HTTP adapter.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::submit_contact_form;
pub use routes::contact_routes;
