//! Claims carried by session and password-reset tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::Permission;

/// Audience pinned into every session token
pub const SESSION_AUDIENCE: &str = "session";

/// Audience pinned into every password-reset token
pub const RESET_AUDIENCE: &str = "password-reset";

/// Session token lifetime (2 hours)
pub const SESSION_TOKEN_EXPIRY_MINUTES: i64 = 120;

/// Reset token lifetime (5 minutes)
pub const RESET_TOKEN_EXPIRY_MINUTES: i64 = 5;

/// Claims of a session token issued at login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account email, absent for phone-only accounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// SHA-256 fingerprint of the stored password hash
    pub pwd_fp: String,

    pub user_id: i64,

    pub permission: Permission,

    /// Issued at (Unix seconds)
    pub iat: i64,

    /// Expires at (Unix seconds)
    pub exp: i64,

    pub aud: String,

    /// Unique token id
    pub jti: String,
}

impl SessionClaims {
    pub fn new(
        email: Option<String>,
        pwd_fp: String,
        user_id: i64,
        permission: Permission,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self {
            email,
            pwd_fp,
            user_id,
            permission,
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
            aud: SESSION_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Same identity with a fresh validity window
    pub fn renewed(&self, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self::new(
            self.email.clone(),
            self.pwd_fp.clone(),
            self.user_id,
            self.permission,
            issued_at,
            lifetime,
        )
    }

    /// A token is valid while `now < exp`
    ///
    /// `iat` and `exp` are JWT NumericDates in whole seconds, so a token issued
    /// at `hh:mm:ss.9` stops being valid at `hh:mm:ss` two hours later, up to
    /// 0.9s before the exact two hour mark.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// Claims of a password-reset token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetClaims {
    pub email: String,

    /// SHA-256 fingerprint of the password hash at issuance
    pub pwd_fp: String,

    pub iat: i64,

    pub exp: i64,

    pub aud: String,

    pub jti: String,
}

impl ResetClaims {
    pub fn new(email: String, pwd_fp: String, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            email,
            pwd_fp,
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
            aud: RESET_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Same whole-second truncation as [`SessionClaims::is_expired_at`]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
