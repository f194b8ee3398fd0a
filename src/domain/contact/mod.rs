//! Contact domain module.
//!
//! Validation of contact-form submissions and the inquiry mail they produce.

mod submission;

pub use submission::ContactSubmission;
