//! Contact form command handlers.

mod submit_contact_form;

pub use submit_contact_form::{ContactMailbox, SubmitContactFormCommand, SubmitContactFormHandler};
