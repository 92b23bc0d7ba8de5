//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Token signing and password hashing configuration
//! - `cache` - Redis configuration for the verification code store
//! - `database` - Database connection and pool configuration
//! - `email` - Outbound SMTP delivery configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `verification` - Verification code shape and lifetime

pub mod auth;
pub mod cache;
pub mod database;
pub mod email;
pub mod environment;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig, PasswordConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use email::{EmailConfig, SmtpConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use verification::VerificationConfig;

/// Errors raised while checking a loaded configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("session and reset signing secrets must differ")]
    SharedSigningSecret,

    #[error("signing secret for {domain} tokens is empty")]
    EmptySecret { domain: String },

    #[error("default signing secrets are not allowed in production")]
    DefaultSecretInProduction,

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Cache configuration
    pub cache: CacheConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Verification code configuration
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Email delivery configuration
    #[serde(default)]
    pub email: EmailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            auth: AuthConfig::default(),
            verification: VerificationConfig::default(),
            email: EmailConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            auth: AuthConfig::from_env(),
            verification: VerificationConfig::from_env(),
            email: EmailConfig::from_env(),
            logging,
        }
    }

    /// Check cross-field constraints that cannot be expressed by defaults
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.jwt.validate()?;
        self.auth.password.validate()?;
        self.verification.validate()?;

        if self.environment.is_production() {
            if self.auth.jwt.is_using_default_secret() {
                return Err(ConfigError::DefaultSecretInProduction);
            }
            self.auth.jwt.validate_production()?;
            self.auth.password.validate_production()?;
            self.verification.validate_production()?;
        }
        if self.auth.jwt.is_using_default_secret() {
            tracing::warn!(
                environment = %self.environment,
                "using default signing secrets; set JWT_SECRET and JWT_RESET_SECRET"
            );
        }
        Ok(())
    }
}

/// Read an environment variable and parse it, falling back to `default`
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
