//! Request and response types for the contact endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::SubmitContactFormCommand;

/// Body of `POST /api/contact`.
///
/// A missing or non-string field reads as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub email: Value,
    #[serde(default)]
    pub message: Value,
}

fn text(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}

impl From<ContactRequest> for SubmitContactFormCommand {
    fn from(request: ContactRequest) -> Self {
        Self {
            name: text(&request.name),
            email: text(&request.email),
            message: text(&request.message),
        }
    }
}

/// Successful contact response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
}

impl ContactResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
