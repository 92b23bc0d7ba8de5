//! Shared utilities and common types for MedAuth server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the process environment
//! - Response envelopes returned by the HTTP layer
//! - Identity validation and log-masking helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, ConfigError, DatabaseConfig, EmailConfig, Environment,
    JwtConfig, LogFormat, LoggingConfig, PasswordConfig, ServerConfig, SmtpConfig,
    VerificationConfig,
};
pub use types::{ErrorResponse, MessageResponse};
pub use utils::validation;
