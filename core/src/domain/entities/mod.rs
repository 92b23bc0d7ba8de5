//! Domain entities representing core business objects.

pub mod token;
pub mod user;
pub mod verification_code;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use token::{
    ResetClaims, SessionClaims, RESET_AUDIENCE, RESET_TOKEN_EXPIRY_MINUTES, SESSION_AUDIENCE,
    SESSION_TOKEN_EXPIRY_MINUTES,
};
pub use user::{AccountStatus, NewUser, Permission, User};
pub use verification_code::{VerificationCode, CODE_LENGTH, CODE_TTL_SECONDS};
