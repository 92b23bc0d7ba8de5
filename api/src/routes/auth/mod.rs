//! Authentication route handlers
//!
//! This module contains all account endpoints:
//! - Signup and login
//! - Verification code issuance and account verification
//! - Forgot-password and reset-password
//! - Session token validation and refresh

pub mod code;
pub mod forgot_password;
pub mod login;
pub mod refresh;
pub mod reset_password;
pub mod signup;
pub mod validate;
pub mod verify;

use std::sync::Arc;

use ma_core::repositories::UserRepository;
use ma_core::services::auth::AuthService;
use ma_core::services::notification::Notifier;
use ma_core::services::verification::ExpiringKeyValueStore;

/// Application state that holds shared services
pub struct AppState<U, S, N>
where
    U: UserRepository,
    S: ExpiringKeyValueStore,
    N: Notifier,
{
    pub auth_service: Arc<AuthService<U, S, N>>,
}

impl<U, S, N> AppState<U, S, N>
where
    U: UserRepository,
    S: ExpiringKeyValueStore,
    N: Notifier,
{
    pub fn new(auth_service: AuthService<U, S, N>) -> Self {
        Self {
            auth_service: Arc::new(auth_service),
        }
    }
}
