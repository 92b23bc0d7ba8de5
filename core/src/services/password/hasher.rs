//! bcrypt password hasher

use sha2::{Digest, Sha256};

use crate::errors::PasswordError;

/// Work factor used unless configured otherwise
pub const DEFAULT_COST: u32 = 14;

/// Salted, irreversible password hashing
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher with an explicit bcrypt cost (4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Produce a salted bcrypt digest of `plaintext`
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| PasswordError::Hashing(e.to_string()))
    }

    /// Check `plaintext` against a stored digest
    ///
    /// A malformed digest is reported as a mismatch.
    pub fn verify(&self, stored_hash: &str, plaintext: &str) -> Result<(), PasswordError> {
        match bcrypt::verify(plaintext, stored_hash) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PasswordError::Mismatch),
            Err(e) => {
                tracing::debug!(error = %e, "stored password hash could not be parsed");
                Err(PasswordError::Mismatch)
            }
        }
    }

    /// Hex SHA-256 of a stored digest
    pub fn fingerprint(stored_hash: &str) -> String {
        hex::encode(Sha256::digest(stored_hash.as_bytes()))
    }

    /// `hash` on the blocking pool
    pub async fn hash_blocking(&self, plaintext: &str) -> Result<String, PasswordError> {
        let hasher = *self;
        let plaintext = plaintext.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| PasswordError::Hashing(e.to_string()))?
    }

    /// `verify` on the blocking pool
    pub async fn verify_blocking(&self, stored_hash: &str, plaintext: &str) -> Result<(), PasswordError> {
        let hasher = *self;
        let stored_hash = stored_hash.to_string();
        let plaintext = plaintext.to_string();
        tokio::task::spawn_blocking(move || hasher.verify(&stored_hash, &plaintext))
            .await
            .map_err(|e| PasswordError::Hashing(e.to_string()))?
    }
}
