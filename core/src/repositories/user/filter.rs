//! Identity filter used for account lookups.

use crate::domain::entities::user::{Permission, User};

/// Matches an account by id, or by email and/or phone, always within one permission
///
/// When both email and phone are given, both must match. An id matches on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityFilter {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub permission: Permission,
}

impl IdentityFilter {
    pub fn by_email(email: impl Into<String>, permission: Permission) -> Self {
        Self {
            id: None,
            email: Some(email.into()),
            phone: None,
            permission,
        }
    }

    pub fn by_contact(email: Option<String>, phone: Option<String>, permission: Permission) -> Self {
        Self {
            id: None,
            email: non_empty(email),
            phone: non_empty(phone),
            permission,
        }
    }

    /// Filter for the account identified by a session: id or email
    pub fn by_session(id: i64, email: Option<String>, permission: Permission) -> Self {
        Self {
            id: Some(id),
            email: non_empty(email),
            phone: None,
            permission,
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        if user.permission != self.permission {
            return false;
        }
        if self.id.is_some_and(|id| id == user.id) {
            return true;
        }

        let email_matches = |email: &String| user.email.as_ref() == Some(email);
        let phone_matches = |phone: &String| user.phone.as_ref() == Some(phone);

        match (&self.email, &self.phone) {
            (Some(email), Some(phone)) => email_matches(email) && phone_matches(phone),
            (Some(email), None) => email_matches(email),
            (None, Some(phone)) => phone_matches(phone),
            (None, None) => false,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
