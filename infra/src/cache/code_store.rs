//! Redis-backed expiring key/value store for verification codes

use async_trait::async_trait;
use std::time::Duration;

use ma_core::errors::DomainError;
use ma_core::services::verification::ExpiringKeyValueStore;

use super::redis_client::RedisClient;

/// [`ExpiringKeyValueStore`] over Redis string keys
///
/// Issuance maps to `SET key value NX EX ttl`, so two concurrent issuers for
/// the same identity cannot both store a code.
#[derive(Clone)]
pub struct RedisCodeStore {
    client: RedisClient,
}

impl RedisCodeStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

/// Redis expiries are whole seconds; never round a live key down to zero
fn expiry_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

/// `PTTL` reply for a key that exists without an expiry
pub(crate) const PTTL_NO_EXPIRY: i64 = -1;

/// Interpret a `PTTL` reply; missing and non-expiring keys have no TTL
pub(crate) fn ttl_from_reply(millis: i64) -> Option<Duration> {
    u64::try_from(millis).ok().map(Duration::from_millis)
}

#[async_trait]
impl ExpiringKeyValueStore for RedisCodeStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.client.get(key).await?)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        Ok(self.client.set_with_expiry(key, value, expiry_seconds(ttl)).await?)
    }

    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> Result<bool, DomainError> {
        Ok(self.client.set_nx_with_expiry(key, value, expiry_seconds(ttl)).await?)
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>, DomainError> {
        let millis = self.client.ttl_millis(key).await?;
        if millis == PTTL_NO_EXPIRY {
            // Codes are always written with an expiry; drop the key so a fresh code can be issued
            tracing::warn!(event = "code_key_without_expiry", "Removing verification key with no expiry");
            self.client.delete(key).await?;
            return Ok(None);
        }
        Ok(ttl_from_reply(millis))
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.client.delete(key).await?)
    }
}
