//! # MedAuth Core
//!
//! Credential and account-verification logic for the MedAuth service.
//! This crate contains the account entities, the password, token and
//! verification-code services, the collaborator interfaces they depend on,
//! and the error types shared with the outer layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{AccountStatus, NewUser, Permission, ResetClaims, SessionClaims, User, VerificationCode};
pub use domain::value_objects::{AuthResponse, Credentials};
pub use errors::{AuthError, DomainError, DomainResult, ErrorKind, PasswordError, TokenError, ValidationError};
pub use repositories::{IdentityFilter, InMemoryUserRepository, UserRepository};
pub use services::{
    AuthService, AuthServiceConfig, CodeStoreConfig, ExpiringKeyValueStore, InMemoryKeyValueStore, IssueOutcome,
    Notifier, PasswordHasher, TemplateKind, TokenService, TokenServiceConfig, VerificationCodeStore,
};
