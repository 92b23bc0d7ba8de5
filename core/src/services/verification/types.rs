//! Types for verification code results

use crate::domain::entities::verification_code::VerificationCode;

/// Result of asking for a new code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueOutcome {
    /// A fresh code was stored and must be delivered
    Issued(VerificationCode),
    /// A code is already outstanding; nothing was minted
    Cooldown { retry_after_seconds: u64 },
}
