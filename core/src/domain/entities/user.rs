//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Account class that scopes every identity lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Permission {
    Patient,
    Doctor,
    Admin,
    Manager,
}

impl Permission {
    pub const ALL: [Permission; 4] = [
        Permission::Patient,
        Permission::Doctor,
        Permission::Admin,
        Permission::Manager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Patient => "PATIENT",
            Permission::Doctor => "DOCTOR",
            Permission::Admin => "ADMIN",
            Permission::Manager => "MANAGER",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ValidationError;

    /// Parses the exact upper-case role name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|permission| permission.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid("permission", format!("permission type {} not allowed", s))
            })
    }
}

/// Verification state of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountStatus {
    #[default]
    Pending,
    Verified,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Pending => "PENDING",
            AccountStatus::Verified => "VERIFIED",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(AccountStatus::Pending),
            "VERIFIED" => Ok(AccountStatus::Verified),
            other => Err(format!("unknown account status: {}", other)),
        }
    }
}

/// A persisted account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// bcrypt digest; never leaves the service in a response
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub permission: Permission,

    pub status: AccountStatus,

    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_verified(&self) -> bool {
        self.status == AccountStatus::Verified
    }

    /// Email address, if the account registered one
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

/// Account data before persistence assigns an id, status and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password_hash: String,
    pub permission: Permission,
}
