//! # Infrastructure Layer
//!
//! Concrete adapters behind the collaborator traits of `ma_core`:
//! - **Database**: MySQL user repository using SQLx
//! - **Cache**: Redis client and the expiring store that holds verification codes
//! - **Email**: SMTP notifier with HTML templates, and a log-only notifier
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable Redis caching support (default)

mod error;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Cache module - Redis client and verification code storage
pub mod cache;

/// Email module - outbound notifications
pub mod email;

pub use error::InfrastructureError;

/// Configuration types consumed by the adapters
pub mod config {
    pub use ma_shared::config::{CacheConfig, DatabaseConfig, EmailConfig, SmtpConfig};
}
