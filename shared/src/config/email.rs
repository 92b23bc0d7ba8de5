//! Outbound email configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// SMTP relay settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Connect with implicit TLS (SMTPS) instead of STARTTLS
    #[serde(default)]
    pub implicit_tls: bool,
    /// Send timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

/// Email delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// SMTP relay; `None` routes mail to the log-only notifier
    #[serde(default)]
    pub smtp: Option<SmtpConfig>,

    /// Sender address
    pub from: String,

    /// Base URL of the password reset page; the token is appended as a query parameter
    pub reset_link_base_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp: None,
            from: String::from("MedAuth <no-reply@medauth.local>"),
            reset_link_base_url: String::from("http://localhost:3000/reset-password"),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let smtp = std::env::var("SMTP_HOST")
            .ok()
            .filter(|host| !host.is_empty())
            .map(|host| SmtpConfig {
                host,
                port: env_or("SMTP_PORT", 587),
                username: std::env::var("SMTP_USERNAME").unwrap_or_default(),
                password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
                implicit_tls: env_or("SMTP_IMPLICIT_TLS", false),
                timeout: env_or("SMTP_TIMEOUT", default_timeout()),
            });

        Self {
            smtp,
            from: std::env::var("SMTP_FROM").unwrap_or(defaults.from),
            reset_link_base_url: std::env::var("RESET_LINK_BASE_URL")
                .unwrap_or(defaults.reset_link_base_url),
        }
    }
}

fn default_timeout() -> u64 {
    10
}
