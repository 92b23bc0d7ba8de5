//! Configuration for the authentication service

use ma_shared::config::AppConfig;

use crate::services::password::DEFAULT_COST;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Page that accepts a reset token as its `token` query parameter
    pub reset_link_base_url: String,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            reset_link_base_url: "http://localhost:3000/reset-password".to_string(),
            bcrypt_cost: DEFAULT_COST,
        }
    }
}

impl AuthServiceConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            reset_link_base_url: config.email.reset_link_base_url.clone(),
            bcrypt_cost: config.auth.password.bcrypt_cost,
        }
    }

    pub fn reset_link(&self, token: &str) -> String {
        format!("{}?token={}", self.reset_link_base_url, token)
    }
}
