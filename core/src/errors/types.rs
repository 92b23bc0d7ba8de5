//! Error types for validation, authentication, tokens and password hashing

use thiserror::Error;

use super::ErrorKind;

/// Input validation failures; raised before any collaborator is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing parameter: {params}")]
    MissingParam { params: String },

    #[error("invalid parameter {param}: {reason}")]
    InvalidParam { param: String, reason: String },
}

impl ValidationError {
    pub fn missing(params: impl Into<String>) -> Self {
        ValidationError::MissingParam {
            params: params.into(),
        }
    }

    pub fn invalid(param: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidParam {
            param: param.into(),
            reason: reason.into(),
        }
    }
}

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("user not found")]
    UserNotFound,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("invalid password, please try again")]
    InvalidCredentials,

    #[error("user not authorized to reset")]
    PasswordChanged,

    #[error("invalid token, user not authorized to perform action")]
    InvalidToken,

    #[error("verification code expired")]
    VerificationCodeExpired,

    #[error("invalid code, try again")]
    InvalidVerificationCode,
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::UserAlreadyExists => ErrorKind::AlreadyExists,
            AuthError::InvalidCredentials | AuthError::PasswordChanged | AuthError::InvalidToken => {
                ErrorKind::Unauthorized
            }
            AuthError::VerificationCodeExpired | AuthError::InvalidVerificationCode => {
                ErrorKind::BadRequest
            }
        }
    }
}

/// Token-related errors
///
/// Session failures are `Unauthorized`; reset failures are `BadRequest`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid token")]
    InvalidSessionToken,

    #[error("token expired")]
    SessionTokenExpired,

    #[error("token invalid")]
    InvalidResetToken,

    #[error("reset token expired")]
    ResetTokenExpired,

    #[error("token generation failed")]
    GenerationFailed,
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenError::InvalidSessionToken | TokenError::SessionTokenExpired => {
                ErrorKind::Unauthorized
            }
            TokenError::InvalidResetToken | TokenError::ResetTokenExpired => ErrorKind::BadRequest,
            TokenError::GenerationFailed => ErrorKind::Internal,
        }
    }
}

/// Password hashing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("password does not match")]
    Mismatch,
}
