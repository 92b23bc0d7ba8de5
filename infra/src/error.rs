//! Infrastructure-specific error types

use ma_core::errors::DomainError;

/// Errors raised by the database, cache and mail adapters
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// SMTP transport error
    #[error("Email error: {0}")]
    Email(#[from] lettre::transport::smtp::Error),

    /// Malformed mail message (bad address, header or body)
    #[error("Email message error: {0}")]
    Message(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<lettre::error::Error> for InfrastructureError {
    fn from(err: lettre::error::Error) -> Self {
        InfrastructureError::Message(err.to_string())
    }
}

impl From<lettre::address::AddressError> for InfrastructureError {
    fn from(err: lettre::address::AddressError) -> Self {
        InfrastructureError::Message(err.to_string())
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Email(_) | InfrastructureError::Message(_) => DomainError::delivery(err.to_string()),
            InfrastructureError::Database(_) | InfrastructureError::Cache(_) | InfrastructureError::Config(_) => {
                DomainError::store(err.to_string())
            }
        }
    }
}
