//! User repository trait defining the interface for account persistence.
//!
//! The core only reads and writes accounts through this trait; the MySQL
//! implementation lives in the infrastructure crate.

use async_trait::async_trait;

use crate::domain::entities::user::{AccountStatus, NewUser, User};
use crate::errors::DomainError;

use super::filter::IdentityFilter;

/// Repository trait for account persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the account matching an identity filter
    ///
    /// # Returns
    /// * `Ok(User)` - Account found
    /// * `Err(DomainError::NotFound)` - No account matches
    /// * `Err(DomainError::Store)` - Database or other error occurred
    async fn get(&self, filter: &IdentityFilter) -> Result<User, DomainError>;

    /// Persist a new account in `PENDING` state and return it as stored
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Replace the stored password hash of an account
    async fn reset_password(&self, user: &User, new_hash: &str) -> Result<(), DomainError>;

    /// Set the verification status of an account
    async fn verify_account(&self, user: &User, status: AccountStatus) -> Result<(), DomainError>;
}
