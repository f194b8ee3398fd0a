//! Email configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use validator::ValidateEmail;

use super::ai::is_http_url;
use super::error::ValidationError;

/// Email configuration (Resend)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key
    pub resend_api_key: Option<SecretString>,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Inbox that receives contact-form inquiries
    pub to_email: Option<String>,

    /// Business name used in the inquiry subject line
    #[serde(default = "default_business_name")]
    pub business_name: String,

    /// Base URL of the Resend API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Recipient address, empty if unset
    pub fn recipient(&self) -> &str {
        self.to_email.as_deref().unwrap_or_default()
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let key = self
            .resend_api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .unwrap_or_default();
        if key.is_empty() {
            return Err(ValidationError::MissingRequired("EMAIL__RESEND_API_KEY"));
        }
        if !key.starts_with("re_") {
            return Err(ValidationError::InvalidResendKey);
        }
        if !self.from_email.validate_email() {
            return Err(ValidationError::InvalidFromEmail);
        }
        if self.recipient().is_empty() {
            return Err(ValidationError::MissingRequired("EMAIL__TO_EMAIL"));
        }
        if !self.recipient().validate_email() {
            return Err(ValidationError::InvalidToEmail);
        }
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidBaseUrl("EMAIL__BASE_URL"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
            to_email: None,
            business_name: default_business_name(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_from_email() -> String {
    "noreply@goldenmountain.tw".to_string()
}

fn default_from_name() -> String {
    "Golden Mountain".to_string()
}

fn default_business_name() -> String {
    "Golden Mountain".to_string()
}

fn default_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> EmailConfig {
        EmailConfig {
            resend_api_key: Some(SecretString::new("re_abcd1234".to_string())),
            to_email: Some("brad@goldenmountain.tw".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_email_config_defaults() {
        let config = EmailConfig::default();
        assert_eq!(config.from_email, "noreply@goldenmountain.tw");
        assert_eq!(config.from_name, "Golden Mountain");
        assert_eq!(config.business_name, "Golden Mountain");
        assert_eq!(config.base_url, "https://api.resend.com");
        assert_eq!(config.recipient(), "");
    }

    #[test]
    fn test_from_header() {
        let config = EmailConfig {
            from_email: "support@example.com".to_string(),
            from_name: "Support Team".to_string(),
            ..Default::default()
        };
        assert_eq!(config.from_header(), "Support Team <support@example.com>");
    }

    #[test]
    fn test_validation_missing_api_key() {
        let config = EmailConfig {
            resend_api_key: None,
            ..configured()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_api_key_prefix() {
        let config = EmailConfig {
            resend_api_key: Some(SecretString::new("sk_xxx".to_string())),
            ..configured()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidResendKey)
        ));
    }

    #[test]
    fn test_validation_invalid_from_email() {
        let config = EmailConfig {
            from_email: "invalid-email".to_string(),
            ..configured()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidFromEmail)
        ));
    }

    #[test]
    fn test_validation_missing_recipient() {
        let config = EmailConfig {
            to_email: None,
            ..configured()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_validation_invalid_recipient() {
        let config = EmailConfig {
            to_email: Some("brad".to_string()),
            ..configured()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidToEmail)
        ));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(configured().validate().is_ok());
    }
}
