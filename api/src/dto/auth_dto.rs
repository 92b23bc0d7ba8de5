use serde::{Deserialize, Serialize};
use validator::Validate;

use ma_core::domain::entities::user::User;
use ma_core::domain::value_objects::{AuthResponse, Credentials};
use ma_shared::types::MessageResponse;

/// Body of `POST /api/login` and `POST /api/signup`
///
/// Presence and format rules are enforced by the service; only size limits
/// are checked here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    // bcrypt only reads the first 72 bytes
    #[serde(default)]
    #[validate(length(max = 72))]
    pub password: Option<String>,
    #[serde(default)]
    #[validate(length(max = 16))]
    pub permission: Option<String>,
}

impl From<CredentialsRequest> for Credentials {
    fn from(request: CredentialsRequest) -> Self {
        Credentials {
            id: None,
            email: request.email,
            phone: request.phone,
            password: request.password,
            permission: request.permission,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 16))]
    pub permission: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    #[validate(length(max = 72))]
    pub password: String,
    #[serde(default)]
    #[validate(length(max = 16))]
    pub permission: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VerifyAccountRequest {
    #[serde(default)]
    #[validate(length(max = 16))]
    pub code: String,
    #[serde(default)]
    #[validate(length(max = 16))]
    pub permission: String,
}

/// `?token=` of `POST /api/reset-password`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenQuery {
    #[serde(default)]
    pub token: String,
}

/// `?email=` of `GET /api/code`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailQuery {
    #[serde(default)]
    pub email: String,
}

/// Wire envelope for a use-case result
pub fn message_response(response: AuthResponse) -> MessageResponse<User> {
    let mut envelope = MessageResponse::new(response.message);
    envelope.token = response.token;
    envelope.user = response.user;
    envelope.data = response.data;
    envelope
}
