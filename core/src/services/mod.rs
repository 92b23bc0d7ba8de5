//! Business services containing domain logic and use cases.

pub mod auth;
pub mod notification;
pub mod password;
pub mod token;
pub mod verification;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use notification::{Notifier, TemplateKind};
pub use password::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
pub use verification::{
    CodeStoreConfig, ExpiringKeyValueStore, InMemoryKeyValueStore, IssueOutcome, VerificationCodeStore,
};
