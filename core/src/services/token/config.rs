//! Configuration for the token service

use jsonwebtoken::Algorithm;
use ma_shared::config::JwtConfig;

use crate::domain::entities::token::{RESET_TOKEN_EXPIRY_MINUTES, SESSION_TOKEN_EXPIRY_MINUTES};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Signing secret for session tokens
    pub session_secret: String,
    /// Signing secret for reset tokens; must differ from `session_secret`
    pub reset_secret: String,
    /// JWT signing algorithm (HMAC family)
    pub algorithm: Algorithm,
    /// Session token expiry in minutes
    pub session_expiry_minutes: i64,
    /// Reset token expiry in minutes
    pub reset_expiry_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            session_secret: "development-session-secret-change-in-production".to_string(),
            reset_secret: "development-reset-secret-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            session_expiry_minutes: SESSION_TOKEN_EXPIRY_MINUTES,
            reset_expiry_minutes: RESET_TOKEN_EXPIRY_MINUTES,
        }
    }
}

impl TokenServiceConfig {
    pub fn new(session_secret: impl Into<String>, reset_secret: impl Into<String>) -> Self {
        Self {
            session_secret: session_secret.into(),
            reset_secret: reset_secret.into(),
            ..Default::default()
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            session_secret: jwt.session_secret.clone(),
            reset_secret: jwt.reset_secret.clone(),
            algorithm: Algorithm::HS256,
            session_expiry_minutes: jwt.session_expiry_minutes,
            reset_expiry_minutes: jwt.reset_expiry_minutes,
        }
    }
}
