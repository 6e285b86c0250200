//! Email configuration

use secrecy::Secret;
use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Resend)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key
    pub resend_api_key: Secret<String>,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Whether results emails are sent at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Send attempts before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        use secrecy::ExposeSecret;

        if !self.enabled {
            return Ok(());
        }
        if self.resend_api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("RESEND_API_KEY"));
        }
        if !self.resend_api_key.expose_secret().starts_with("re_") {
            return Err(ValidationError::InvalidResendKey);
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: Secret::new(String::new()),
            from_email: default_from_email(),
            from_name: default_from_name(),
            enabled: default_enabled(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_from_email() -> String {
    "results@culturecompass.app".to_string()
}

fn default_from_name() -> String {
    "Culture Compass".to_string()
}

fn default_enabled() -> bool {
    false
}

fn default_max_attempts() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_email_skips_validation() {
        let config = EmailConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn enabled_email_requires_resend_key_format() {
        let config = EmailConfig {
            enabled: true,
            resend_api_key: Secret::new("not-a-key".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EmailConfig {
            enabled: true,
            resend_api_key: Secret::new("re_12345".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_header_combines_name_and_address() {
        let config = EmailConfig::default();
        assert_eq!(
            config.from_header(),
            "Culture Compass <results@culturecompass.app>"
        );
    }
}
