//! Verification code store implementation

use constant_time_eq::constant_time_eq;
use ma_shared::utils::mask_identity;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::{AuthError, DomainResult};

use super::config::CodeStoreConfig;
use super::traits::ExpiringKeyValueStore;
use super::types::IssueOutcome;

/// Short-lived single-use codes keyed by identity
pub struct VerificationCodeStore<S: ExpiringKeyValueStore> {
    store: Arc<S>,
    config: CodeStoreConfig,
}

impl<S: ExpiringKeyValueStore> VerificationCodeStore<S> {
    pub fn new(store: Arc<S>, config: CodeStoreConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &CodeStoreConfig {
        &self.config
    }

    fn key(&self, identity: &str) -> String {
        format!("{}{}", self.config.key_prefix, identity)
    }

    /// Issue a code for `identity` unless one is already outstanding
    ///
    /// The code is written with an atomic set-if-absent, so concurrent callers
    /// for the same identity end up with exactly one stored code.
    pub async fn issue(&self, identity: &str) -> DomainResult<IssueOutcome> {
        let key = self.key(identity);

        if let Some(remaining) = self.store.ttl(&key).await? {
            tracing::info!(
                identity = %mask_identity(identity),
                retry_after = remaining.as_secs(),
                event = "verification_code_cooldown",
                "Verification code already outstanding"
            );
            return Ok(self.cooldown(remaining));
        }

        let code = VerificationCode::generate(self.config.code_length);
        let stored = self
            .store
            .set_if_absent(&key, code.as_str(), self.config.code_ttl)
            .await?;

        if !stored {
            let remaining = self.store.ttl(&key).await?.unwrap_or(self.config.code_ttl);
            tracing::info!(
                identity = %mask_identity(identity),
                event = "verification_code_race",
                "Concurrent issue won by another request"
            );
            return Ok(self.cooldown(remaining));
        }

        tracing::info!(
            identity = %mask_identity(identity),
            ttl = self.config.code_ttl.as_secs(),
            event = "verification_code_issued",
            "Issued verification code"
        );
        Ok(IssueOutcome::Issued(code))
    }

    /// Check `supplied` against the code on record for `identity`
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Exact match; the code is consumed
    /// * `Err(AuthError::VerificationCodeExpired)` - No code on record
    /// * `Err(AuthError::InvalidVerificationCode)` - A code exists but differs
    pub async fn check(&self, identity: &str, supplied: &str) -> DomainResult<bool> {
        let key = self.key(identity);

        let Some(stored) = self.store.get(&key).await? else {
            tracing::warn!(
                identity = %mask_identity(identity),
                event = "verification_code_expired",
                "No verification code on record"
            );
            return Err(AuthError::VerificationCodeExpired.into());
        };

        if !constant_time_eq(stored.as_bytes(), supplied.as_bytes()) {
            tracing::warn!(
                identity = %mask_identity(identity),
                event = "verification_code_mismatch",
                "Verification code does not match"
            );
            return Err(AuthError::InvalidVerificationCode.into());
        }

        // Whoever deletes the key consumes the code
        if !self.store.delete(&key).await? {
            return Err(AuthError::VerificationCodeExpired.into());
        }

        tracing::info!(
            identity = %mask_identity(identity),
            event = "verification_code_consumed",
            "Verification code accepted"
        );
        Ok(true)
    }

    fn cooldown(&self, remaining: Duration) -> IssueOutcome {
        let seconds = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
        IssueOutcome::Cooldown {
            retry_after_seconds: seconds.max(1),
        }
    }
}
