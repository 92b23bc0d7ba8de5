//! Result of an authentication use case.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Outcome returned by every `AuthService` use case
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Human-readable outcome
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Session token, present only for login and refresh
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl AuthResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user: None,
            token: None,
            data: None,
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}
