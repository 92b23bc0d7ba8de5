//! Configuration for the verification code store

use std::time::Duration;

use ma_shared::config::VerificationConfig;

use crate::domain::entities::verification_code::{CODE_LENGTH, CODE_TTL_SECONDS};

/// Shape and lifetime of issued codes
#[derive(Debug, Clone)]
pub struct CodeStoreConfig {
    /// Number of digits per code
    pub code_length: usize,
    /// Code lifetime; a second issue inside this window is refused
    pub code_ttl: Duration,
    /// Prefix of the store key, followed by the identity
    pub key_prefix: String,
}

impl Default for CodeStoreConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            code_ttl: Duration::from_secs(CODE_TTL_SECONDS),
            key_prefix: "verification:code:".to_string(),
        }
    }
}

impl From<&VerificationConfig> for CodeStoreConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_length: config.code_length,
            code_ttl: Duration::from_secs(config.code_ttl_seconds),
            key_prefix: config.key_prefix.clone(),
        }
    }
}
