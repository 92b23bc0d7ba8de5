//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, PasswordError, TokenError, ValidationError};

use thiserror::Error;

/// Status classification of a failure, independent of transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    AlreadyExists,
    Unauthorized,
    BadRequest,
    Store,
    Delivery,
    Internal,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Delivery error: {message}")]
    Delivery { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Status classification used by the transport layer
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Store { .. } => ErrorKind::Store,
            DomainError::Delivery { .. } => ErrorKind::Delivery,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::ValidationErr(_) => ErrorKind::Validation,
            DomainError::Auth(err) => err.kind(),
            DomainError::Token(err) => err.kind(),
        }
    }

    /// Reason string safe to show a caller; collaborator detail stays in the logs
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Store | ErrorKind::Internal => "internal server error".to_string(),
            ErrorKind::Delivery => "failed to deliver notification".to_string(),
            _ => self.to_string(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        DomainError::Store {
            message: message.into(),
        }
    }

    pub fn delivery(message: impl Into<String>) -> Self {
        DomainError::Delivery {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
