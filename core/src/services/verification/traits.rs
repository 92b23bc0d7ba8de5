//! Expiring key/value capability backing verification codes

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::DomainError;

/// Key/value store whose entries expire on their own
///
/// Failures are reported as `DomainError::Store`.
#[async_trait]
pub trait ExpiringKeyValueStore: Send + Sync {
    /// Value under `key`, or `None` if absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Store `value` only if `key` holds nothing; returns whether it was stored
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> Result<bool, DomainError>;

    /// Remaining lifetime of `key`, or `None` if absent
    async fn ttl(&self, key: &str) -> Result<Option<Duration>, DomainError>;

    /// Remove `key`; returns whether something was removed
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;
}
