//! Verification code configuration

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

/// Code lifetime required outside development
pub const CODE_TTL_SECONDS: u64 = 120;

/// Shape and lifetime of verification codes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of digits in a code
    pub code_length: usize,

    /// Code lifetime in seconds; also the resend cooldown
    pub code_ttl_seconds: u64,

    /// Prefix of the store key holding a code
    pub key_prefix: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: 8,
            code_ttl_seconds: CODE_TTL_SECONDS,
            key_prefix: String::from("verification:code:"),
        }
    }
}

impl VerificationConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_ttl_seconds: env_or("VERIFICATION_CODE_TTL_SECONDS", defaults.code_ttl_seconds),
            ..defaults
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 {
            return Err(ConfigError::InvalidValue {
                key: "code_length".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.code_ttl_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "code_ttl_seconds".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Production codes are 8 digits that live for 2 minutes
    pub fn validate_production(&self) -> Result<(), ConfigError> {
        if self.code_length != 8 {
            return Err(ConfigError::InvalidValue {
                key: "code_length".to_string(),
                reason: "must be 8 in production".to_string(),
            });
        }
        if self.code_ttl_seconds != CODE_TTL_SECONDS {
            return Err(ConfigError::InvalidValue {
                key: "VERIFICATION_CODE_TTL_SECONDS".to_string(),
                reason: format!("must be {} in production", CODE_TTL_SECONDS),
            });
        }
        Ok(())
    }
}
