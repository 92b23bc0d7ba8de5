//! Verification code module for email-based account verification
//!
//! This module provides the verification code workflow:
//! - Cooldown-aware code issuance, one outstanding code per identity
//! - Single-use code checks with constant-time comparison
//! - The expiring key/value capability the codes live in

mod config;
mod memory;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::CodeStoreConfig;
pub use memory::InMemoryKeyValueStore;
pub use service::VerificationCodeStore;
pub use traits::ExpiringKeyValueStore;
pub use types::IssueOutcome;
