//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::entities::token::{ResetClaims, SessionClaims, RESET_AUDIENCE, SESSION_AUDIENCE};
use crate::domain::entities::user::Permission;
use crate::errors::{DomainError, TokenError};
use crate::services::password::PasswordHasher;

use super::config::TokenServiceConfig;

/// Keys and validation rules of one token class
struct SigningDomain {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SigningDomain {
    fn new(secret: &str, algorithm: Algorithm, audience: &str) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "aud"]);
        // Expiry is checked against an explicit instant after decoding
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            header: Header::new(algorithm),
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    fn encode<C: Serialize>(&self, claims: &C) -> Result<String, DomainError> {
        encode(&self.header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "failed to sign token");
            DomainError::Token(TokenError::GenerationFailed)
        })
    }

    fn decode<C: DeserializeOwned>(&self, token: &str) -> Result<C, jsonwebtoken::errors::Error> {
        decode::<C>(token, &self.decoding_key, &self.validation).map(|data| data.claims)
    }
}

/// Service for signing and verifying session and reset tokens
pub struct TokenService {
    config: TokenServiceConfig,
    session: SigningDomain,
    reset: SigningDomain,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// Fails when a secret is empty, when both classes share one secret, or
    /// when the algorithm is not an HMAC algorithm.
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.session_secret.is_empty() || config.reset_secret.is_empty() {
            return Err(DomainError::internal("token signing secrets must not be empty"));
        }
        if config.session_secret == config.reset_secret {
            return Err(DomainError::internal(
                "session and reset tokens must be signed with different secrets",
            ));
        }
        if !matches!(config.algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(DomainError::internal(format!(
                "unsupported token algorithm {:?}",
                config.algorithm
            )));
        }

        let session = SigningDomain::new(&config.session_secret, config.algorithm, SESSION_AUDIENCE);
        let reset = SigningDomain::new(&config.reset_secret, config.algorithm, RESET_AUDIENCE);

        Ok(Self {
            config,
            session,
            reset,
        })
    }

    pub fn session_lifetime(&self) -> Duration {
        Duration::minutes(self.config.session_expiry_minutes)
    }

    pub fn reset_lifetime(&self) -> Duration {
        Duration::minutes(self.config.reset_expiry_minutes)
    }

    /// Issues a session token for an authenticated account
    pub fn issue_session(
        &self,
        email: Option<&str>,
        password_hash: &str,
        user_id: i64,
        permission: Permission,
    ) -> Result<String, DomainError> {
        self.issue_session_at(email, password_hash, user_id, permission, Utc::now())
    }

    pub fn issue_session_at(
        &self,
        email: Option<&str>,
        password_hash: &str,
        user_id: i64,
        permission: Permission,
        now: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = SessionClaims::new(
            email.map(str::to_string),
            PasswordHasher::fingerprint(password_hash),
            user_id,
            permission,
            now,
            self.session_lifetime(),
        );
        self.session.encode(&claims)
    }

    /// Verifies a session token
    ///
    /// # Returns
    ///
    /// * `Ok(SessionClaims)` - The decoded claims if valid
    /// * `Err(TokenError::InvalidSessionToken)` - Bad signature, wrong class or malformed claims
    /// * `Err(TokenError::SessionTokenExpired)` - `now` is at or past the expiry
    pub fn verify_session(&self, token: &str) -> Result<SessionClaims, DomainError> {
        self.verify_session_at(token, Utc::now())
    }

    pub fn verify_session_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, DomainError> {
        let claims: SessionClaims = self.session.decode(token).map_err(|e| {
            tracing::debug!(error = ?e.kind(), "session token rejected");
            TokenError::InvalidSessionToken
        })?;

        if claims.is_expired_at(now) {
            return Err(TokenError::SessionTokenExpired.into());
        }
        Ok(claims)
    }

    /// Re-signs verified session claims with a fresh expiry window
    pub fn refresh_session(&self, claims: &SessionClaims) -> Result<String, DomainError> {
        self.refresh_session_at(claims, Utc::now())
    }

    pub fn refresh_session_at(&self, claims: &SessionClaims, now: DateTime<Utc>) -> Result<String, DomainError> {
        self.session.encode(&claims.renewed(now, self.session_lifetime()))
    }

    /// Issues a reset token bound to the account's current password hash
    pub fn issue_reset(&self, email: &str, password_hash: &str) -> Result<String, DomainError> {
        self.issue_reset_at(email, password_hash, Utc::now())
    }

    pub fn issue_reset_at(
        &self,
        email: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = ResetClaims::new(
            email.to_string(),
            PasswordHasher::fingerprint(password_hash),
            now,
            self.reset_lifetime(),
        );
        self.reset.encode(&claims)
    }

    /// Verifies a reset token; failures are client errors
    pub fn verify_reset(&self, token: &str) -> Result<ResetClaims, DomainError> {
        self.verify_reset_at(token, Utc::now())
    }

    pub fn verify_reset_at(&self, token: &str, now: DateTime<Utc>) -> Result<ResetClaims, DomainError> {
        let claims: ResetClaims = self.reset.decode(token).map_err(|e| {
            tracing::debug!(error = ?e.kind(), "reset token rejected");
            TokenError::InvalidResetToken
        })?;

        if claims.is_expired_at(now) {
            return Err(TokenError::ResetTokenExpired.into());
        }
        Ok(claims)
    }
}
