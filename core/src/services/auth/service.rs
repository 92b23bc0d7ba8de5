//! Main authentication service implementation

use constant_time_eq::constant_time_eq;
use ma_shared::utils::mask_identity;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::user::{AccountStatus, NewUser, User};
use crate::domain::value_objects::{AuthResponse, Credentials};
use crate::errors::{AuthError, DomainError, DomainResult, PasswordError, ValidationError};
use crate::repositories::{IdentityFilter, UserRepository};
use crate::services::notification::{Notifier, TemplateKind};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;
use crate::services::verification::{ExpiringKeyValueStore, IssueOutcome, VerificationCodeStore};

use super::config::AuthServiceConfig;
use super::validation::{parse_permission, require, validate_credentials};

/// Authentication service driving the account lifecycle
///
/// Accounts start `PENDING` and become `VERIFIED` only through
/// [`AuthService::verify_account`].
pub struct AuthService<U, S, N>
where
    U: UserRepository,
    S: ExpiringKeyValueStore,
    N: Notifier,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Token service for session and reset tokens
    token_service: Arc<TokenService>,
    /// Verification code store
    code_store: Arc<VerificationCodeStore<S>>,
    /// Outbound notifications
    notifier: Arc<N>,
    hasher: PasswordHasher,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, S, N> AuthService<U, S, N>
where
    U: UserRepository,
    S: ExpiringKeyValueStore,
    N: Notifier,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for account persistence
    /// * `token_service` - Signs and verifies session and reset tokens
    /// * `code_store` - Issues and checks verification codes
    /// * `notifier` - Delivers verification codes and reset links
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        code_store: Arc<VerificationCodeStore<S>>,
        notifier: Arc<N>,
        config: AuthServiceConfig,
    ) -> Self {
        let hasher = PasswordHasher::with_cost(config.bcrypt_cost);
        Self {
            user_repository,
            token_service,
            code_store,
            notifier,
            hasher,
            config,
        }
    }

    /// Register a new account in `PENDING` state
    ///
    /// A verification code is issued and mailed once the account is stored.
    /// The response carries the new user but no session token.
    pub async fn signup(&self, credentials: Credentials) -> DomainResult<AuthResponse> {
        let input = validate_credentials(&credentials)?;
        let filter = IdentityFilter::by_contact(input.email.clone(), input.phone.clone(), input.permission);

        match self.user_repository.get(&filter).await {
            Ok(_) => {
                tracing::warn!(
                    permission = %input.permission,
                    event = "signup_duplicate",
                    "Signup rejected, account already exists"
                );
                return Err(AuthError::UserAlreadyExists.into());
            }
            Err(DomainError::NotFound { .. }) => {}
            Err(e) => return Err(e),
        }

        let password_hash = self.hash_password(&input.password).await?;
        let user = self
            .user_repository
            .create(NewUser {
                email: input.email,
                phone: input.phone,
                password_hash,
                permission: input.permission,
            })
            .await?;

        tracing::info!(
            user_id = user.id,
            permission = %user.permission,
            event = "user_created",
            "Created account pending verification"
        );

        if let Some(email) = user.email() {
            if let Err(e) = self.issue_and_notify(email).await {
                tracing::warn!(
                    user_id = user.id,
                    error = %e,
                    event = "signup_code_failed",
                    "Account created but verification code could not be issued"
                );
            }
        }

        Ok(AuthResponse::message("user created successfully, please verify your registered email").with_user(user))
    }

    /// Authenticate with identity and password and issue a session token
    ///
    /// Works the same for `PENDING` and `VERIFIED` accounts.
    pub async fn login(&self, credentials: Credentials) -> DomainResult<AuthResponse> {
        let input = validate_credentials(&credentials)?;
        let filter = IdentityFilter::by_contact(input.email, input.phone, input.permission);
        let user = self.find_user(&filter).await?;

        match self.hasher.verify_blocking(&user.password_hash, &input.password).await {
            Ok(()) => {}
            Err(PasswordError::Mismatch) => {
                tracing::warn!(user_id = user.id, event = "login_failed", "Invalid password");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(PasswordError::Hashing(message)) => return Err(DomainError::internal(message)),
        }

        let token = self
            .token_service
            .issue_session(user.email(), &user.password_hash, user.id, user.permission)?;

        tracing::info!(user_id = user.id, event = "login_succeeded", "User logged in");
        Ok(AuthResponse::message("user logged in successfully")
            .with_user(user)
            .with_token(token))
    }

    /// Re-issue a valid session token with a fresh 2 hour window
    ///
    /// Trusts the presented claims; the repository is not consulted.
    pub async fn refresh_token(&self, token: &str) -> DomainResult<AuthResponse> {
        let claims = self.token_service.verify_session(token)?;
        let refreshed = self.token_service.refresh_session(&claims)?;

        tracing::debug!(user_id = claims.user_id, event = "token_refreshed", "Session token refreshed");
        Ok(AuthResponse::message("token refreshed successfully").with_token(refreshed))
    }

    /// Check a session token; `Ok(false)` when it names no account
    pub async fn validate_token(&self, token: &str) -> DomainResult<bool> {
        let claims = self.token_service.verify_session(token)?;
        Ok(claims.user_id > 0)
    }

    /// Mail a reset link bound to the account's current password
    ///
    /// Unknown accounts are reported as `UserNotFound`.
    pub async fn forgot_password(&self, email: &str, permission: &str) -> DomainResult<AuthResponse> {
        let email = require(email, "email")?;
        let permission = parse_permission(permission)?;

        let user = self.find_user(&IdentityFilter::by_email(email, permission)).await?;
        let token = self.token_service.issue_reset(email, &user.password_hash)?;

        if let Some(address) = user.email() {
            let data = HashMap::from([
                ("resetLink".to_string(), self.config.reset_link(&token)),
                ("user".to_string(), address.to_string()),
            ]);
            self.notify(address, TemplateKind::PasswordReset, data).await;
        }

        tracing::info!(user_id = user.id, event = "reset_link_issued", "Issued password reset token");
        Ok(AuthResponse::message("reset link sent on registered mail"))
    }

    /// Replace the password of the account named by a reset token
    ///
    /// Fails with `PasswordChanged` when the password changed after the token was issued.
    pub async fn reset_password(
        &self,
        permission: &str,
        new_password: &str,
        token: &str,
    ) -> DomainResult<AuthResponse> {
        if new_password.is_empty() {
            return Err(ValidationError::missing("password").into());
        }
        let permission = parse_permission(permission)?;

        let claims = self.token_service.verify_reset(token)?;
        let user = self
            .find_user(&IdentityFilter::by_email(claims.email.clone(), permission))
            .await?;

        let current = PasswordHasher::fingerprint(&user.password_hash);
        if !constant_time_eq(current.as_bytes(), claims.pwd_fp.as_bytes()) {
            tracing::warn!(user_id = user.id, event = "reset_token_stale", "Password changed since reset token was issued");
            return Err(AuthError::PasswordChanged.into());
        }

        let password_hash = self.hash_password(new_password).await?;
        self.user_repository.reset_password(&user, &password_hash).await?;

        tracing::info!(user_id = user.id, event = "password_reset", "Password reset");
        Ok(AuthResponse::message("password reset successfully"))
    }

    /// Move the session's account from `PENDING` to `VERIFIED` with a valid code
    pub async fn verify_account(&self, code: &str, permission: &str, token: &str) -> DomainResult<AuthResponse> {
        let code = require(code, "code")?;
        let permission = parse_permission(permission)?;

        let claims = self.token_service.verify_session(token)?;
        if claims.permission != permission {
            return Err(AuthError::InvalidToken.into());
        }

        let user = self
            .find_user(&IdentityFilter::by_session(claims.user_id, claims.email.clone(), permission))
            .await?;

        if user.is_verified() {
            return Ok(AuthResponse::message("account already verified"));
        }

        let current = PasswordHasher::fingerprint(&user.password_hash);
        if !constant_time_eq(current.as_bytes(), claims.pwd_fp.as_bytes()) {
            return Err(AuthError::InvalidToken.into());
        }

        let email = user.email().ok_or_else(|| ValidationError::missing("email"))?;
        self.code_store.check(email, code).await?;
        self.user_repository.verify_account(&user, AccountStatus::Verified).await?;

        tracing::info!(user_id = user.id, event = "account_verified", "Account verified");
        Ok(AuthResponse::message("account verified successfully"))
    }

    /// Issue a signup verification code unless one is outstanding
    ///
    /// Delivery failures are logged; the stored code stays valid.
    pub async fn generate_signup_verification_code(&self, email: &str) -> DomainResult<AuthResponse> {
        let email = require(email, "email")?;

        match self.issue_and_notify(email).await? {
            IssueOutcome::Issued(_) => Ok(AuthResponse::message("new code sent to registered email")),
            IssueOutcome::Cooldown { retry_after_seconds } => Ok(AuthResponse::message(format!(
                "code already sent, retry after {} seconds",
                retry_after_seconds
            ))
            .with_data(json!({ "retry_after": retry_after_seconds }))),
        }
    }

    async fn find_user(&self, filter: &IdentityFilter) -> DomainResult<User> {
        self.user_repository.get(filter).await.map_err(|e| match e {
            DomainError::NotFound { .. } => AuthError::UserNotFound.into(),
            other => other,
        })
    }

    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        self.hasher
            .hash_blocking(password)
            .await
            .map_err(|e| DomainError::internal(e.to_string()))
    }

    async fn issue_and_notify(&self, email: &str) -> DomainResult<IssueOutcome> {
        let outcome = self.code_store.issue(email).await?;
        if let IssueOutcome::Issued(code) = &outcome {
            let data = HashMap::from([
                ("code".to_string(), code.as_str().to_string()),
                ("user".to_string(), email.to_string()),
            ]);
            self.notify(email, TemplateKind::VerificationCode, data).await;
        }
        Ok(outcome)
    }

    /// Best-effort delivery
    async fn notify(&self, to: &str, template: TemplateKind, data: HashMap<String, String>) {
        if let Err(e) = self.notifier.send(to, template, data).await {
            tracing::warn!(
                to = %mask_identity(to),
                template = %template,
                error = %e,
                event = "notification_failed",
                "Failed to deliver notification"
            );
        }
    }
}
