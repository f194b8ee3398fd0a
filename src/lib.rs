//! Golden Mountain - Website backend
//!
//! This crate serves the marketing site's chat assistant and contact form,
//! proxying each request to the LLM and email providers behind a validation
//! gate and a fixed client-facing error vocabulary.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
