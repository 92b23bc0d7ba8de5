//! Authentication service module
//!
//! This module composes password hashing, token signing, verification codes,
//! account persistence and notification into the account use cases:
//! - Signup and login
//! - Session token refresh and validation
//! - Forgot-password and reset-password
//! - Account verification and verification code issuance

mod config;
mod service;
mod validation;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
