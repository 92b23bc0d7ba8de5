//! Input validation for the authentication use cases

use ma_shared::validation::{is_valid_email, is_valid_phone};

use crate::domain::entities::user::Permission;
use crate::domain::value_objects::Credentials;
use crate::errors::ValidationError;

/// Credentials that passed validation
#[derive(Debug, Clone)]
pub(crate) struct ValidatedCredentials {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: String,
    pub permission: Permission,
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Password non-empty, at least one of email/phone, permission in the enumerated set
pub(crate) fn validate_credentials(credentials: &Credentials) -> Result<ValidatedCredentials, ValidationError> {
    let password = credentials
        .password
        .clone()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ValidationError::missing("password"))?;

    let email = present(&credentials.email);
    let phone = present(&credentials.phone);
    if email.is_none() && phone.is_none() {
        return Err(ValidationError::missing("email/phone"));
    }

    let permission = parse_permission(credentials.permission.as_deref().unwrap_or_default())?;

    if let Some(email) = &email {
        if !is_valid_email(email) {
            return Err(ValidationError::invalid("email", "invalid email format"));
        }
    }
    if let Some(phone) = &phone {
        if !is_valid_phone(phone) {
            return Err(ValidationError::invalid("phone", "invalid phone format"));
        }
    }

    Ok(ValidatedCredentials {
        email,
        phone,
        password,
        permission,
    })
}

pub(crate) fn parse_permission(raw: &str) -> Result<Permission, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::missing("permission"));
    }
    raw.parse()
}

pub(crate) fn require<'a>(value: &'a str, param: &str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::missing(param))
    } else {
        Ok(value)
    }
}
