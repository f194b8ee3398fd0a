//! Contact form inbound gate.

use validator::ValidateEmail;

use crate::domain::errors::{messages, ProxyError};

/// A visitor inquiry that passed validation.
///
/// All fields are trimmed and non-empty; `email` is syntactically valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    /// Trims and validates the three form fields.
    ///
    /// # Errors
    ///
    /// - `All fields are required.` if any field is blank after trimming
    /// - `Invalid email address.` if `email` fails the syntax check
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ProxyError> {
        let (name, email, message) = (name.trim(), email.trim(), message.trim());

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ProxyError::InvalidInput(messages::ALL_FIELDS_REQUIRED));
        }

        if !email.validate_email() {
            return Err(ProxyError::InvalidInput(messages::INVALID_EMAIL));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Subject line of the notification mail.
    pub fn subject(&self, business_name: &str) -> String {
        format!("[{}] New inquiry from {}", business_name, self.name)
    }

    /// Plain-text body of the notification mail.
    pub fn body_text(&self) -> String {
        format!("Name: {}\nEmail: {}\n\n{}", self.name, self.email, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(result: Result<ContactSubmission, ProxyError>, message: &str) {
        match result {
            Err(ProxyError::InvalidInput(m)) => assert_eq!(m, message),
            other => panic!("expected InvalidInput({:?}), got {:?}", message, other),
        }
    }

    #[test]
    fn valid_submission_is_trimmed() {
        let submission = ContactSubmission::new("  Jo ", " jo@x.com\n", "\thi there ").unwrap();
        assert_eq!(submission.name(), "Jo");
        assert_eq!(submission.email(), "jo@x.com");
        assert_eq!(submission.message(), "hi there");
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_invalid(
            ContactSubmission::new("", "jo@x.com", "hi"),
            messages::ALL_FIELDS_REQUIRED,
        );
        assert_invalid(
            ContactSubmission::new("Jo", "   ", "hi"),
            messages::ALL_FIELDS_REQUIRED,
        );
        assert_invalid(
            ContactSubmission::new("Jo", "jo@x.com", "\n\t "),
            messages::ALL_FIELDS_REQUIRED,
        );
    }

    #[test]
    fn missing_fields_win_over_bad_email() {
        assert_invalid(
            ContactSubmission::new("", "not-an-email", "hi"),
            messages::ALL_FIELDS_REQUIRED,
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["not-an-email", "jo@", "@x.com", "jo x@x.com", "jo@@x.com"] {
            assert_invalid(
                ContactSubmission::new("Jo", email, "hi"),
                messages::INVALID_EMAIL,
            );
        }
    }

    #[test]
    fn subject_uses_business_name_and_visitor_name() {
        let submission = ContactSubmission::new("Jo", "jo@x.com", "hi").unwrap();
        assert_eq!(
            submission.subject("Golden Mountain"),
            "[Golden Mountain] New inquiry from Jo"
        );
    }

    #[test]
    fn body_contains_all_fields_verbatim() {
        let submission =
            ContactSubmission::new("Jo", "jo@x.com", "Need a site.\nBudget: flexible").unwrap();
        assert_eq!(
            submission.body_text(),
            "Name: Jo\nEmail: jo@x.com\n\nNeed a site.\nBudget: flexible"
        );
    }
}
