//! Authentication configuration: token signing and password hashing

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

const DEFAULT_SESSION_SECRET: &str = "development-session-secret-change-in-production";
const DEFAULT_RESET_SECRET: &str = "development-reset-secret-change-in-production";

/// Session token lifetime required outside development
pub const SESSION_EXPIRY_MINUTES: i64 = 120;
/// Reset token lifetime required outside development
pub const RESET_EXPIRY_MINUTES: i64 = 5;
/// Smallest bcrypt work factor accepted in production
pub const MIN_PRODUCTION_BCRYPT_COST: u32 = 14;

/// JWT signing configuration for the two token domains
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for session tokens
    pub session_secret: String,

    /// Secret key for password-reset tokens
    pub reset_secret: String,

    /// Session token lifetime in minutes
    pub session_expiry_minutes: i64,

    /// Reset token lifetime in minutes
    pub reset_expiry_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            session_secret: String::from(DEFAULT_SESSION_SECRET),
            reset_secret: String::from(DEFAULT_RESET_SECRET),
            session_expiry_minutes: SESSION_EXPIRY_MINUTES,
            reset_expiry_minutes: RESET_EXPIRY_MINUTES,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with both secrets
    pub fn new(session_secret: impl Into<String>, reset_secret: impl Into<String>) -> Self {
        Self {
            session_secret: session_secret.into(),
            reset_secret: reset_secret.into(),
            ..Default::default()
        }
    }

    /// Check if using a default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.session_secret == DEFAULT_SESSION_SECRET || self.reset_secret == DEFAULT_RESET_SECRET
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_secret.is_empty() {
            return Err(ConfigError::EmptySecret {
                domain: "session".to_string(),
            });
        }
        if self.reset_secret.is_empty() {
            return Err(ConfigError::EmptySecret {
                domain: "reset".to_string(),
            });
        }
        if self.session_secret == self.reset_secret {
            return Err(ConfigError::SharedSigningSecret);
        }
        if self.session_expiry_minutes <= 0 || self.reset_expiry_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "token expiry".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Production tokens must use the fixed 2 hour and 5 minute lifetimes
    pub fn validate_production(&self) -> Result<(), ConfigError> {
        if self.session_expiry_minutes != SESSION_EXPIRY_MINUTES {
            return Err(ConfigError::InvalidValue {
                key: "JWT_SESSION_EXPIRY_MINUTES".to_string(),
                reason: format!("must be {} in production", SESSION_EXPIRY_MINUTES),
            });
        }
        if self.reset_expiry_minutes != RESET_EXPIRY_MINUTES {
            return Err(ConfigError::InvalidValue {
                key: "JWT_RESET_EXPIRY_MINUTES".to_string(),
                reason: format!("must be {} in production", RESET_EXPIRY_MINUTES),
            });
        }
        Ok(())
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: MIN_PRODUCTION_BCRYPT_COST,
        }
    }
}

impl PasswordConfig {
    /// bcrypt only accepts work factors 4 through 31
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST".to_string(),
                reason: format!("{} is outside 4..=31", self.bcrypt_cost),
            });
        }
        Ok(())
    }

    pub fn validate_production(&self) -> Result<(), ConfigError> {
        if self.bcrypt_cost < MIN_PRODUCTION_BCRYPT_COST {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST".to_string(),
                reason: format!("must be at least {} in production", MIN_PRODUCTION_BCRYPT_COST),
            });
        }
        Ok(())
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let session_secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| defaults.session_secret.clone());
        let reset_secret =
            std::env::var("JWT_RESET_SECRET").unwrap_or_else(|_| defaults.reset_secret.clone());

        Self {
            jwt: JwtConfig {
                session_secret,
                reset_secret,
                session_expiry_minutes: env_or(
                    "JWT_SESSION_EXPIRY_MINUTES",
                    defaults.session_expiry_minutes,
                ),
                reset_expiry_minutes: env_or(
                    "JWT_RESET_EXPIRY_MINUTES",
                    defaults.reset_expiry_minutes,
                ),
            },
            password: PasswordConfig {
                bcrypt_cost: env_or("BCRYPT_COST", PasswordConfig::default().bcrypt_cost),
            },
        }
    }
}
