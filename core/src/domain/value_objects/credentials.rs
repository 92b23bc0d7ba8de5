//! Raw credential input for signup and login.

use serde::{Deserialize, Serialize};

/// Unvalidated identity and password as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub permission: Option<String>,
}

impl Credentials {
    pub fn email(email: impl Into<String>, password: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
            permission: Some(permission.into()),
            ..Default::default()
        }
    }

    pub fn phone(phone: impl Into<String>, password: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            password: Some(password.into()),
            permission: Some(permission.into()),
            ..Default::default()
        }
    }
}
