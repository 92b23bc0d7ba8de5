//! One-time numeric verification codes.

use rand::rngs::OsRng;
use rand::Rng;
use std::fmt;

/// Digits in a verification code
pub const CODE_LENGTH: usize = 8;

/// Code lifetime, which is also the resend cooldown
pub const CODE_TTL_SECONDS: u64 = 120;

/// An issued verification code
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Generates a code of `length` digits drawn uniformly from `0-9` with the OS CSPRNG
    pub fn generate(length: usize) -> Self {
        let mut rng = OsRng;
        let code = (0..length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether `candidate` has the shape of a code of `length` digits
    pub fn is_well_formed(candidate: &str, length: usize) -> bool {
        candidate.len() == length && candidate.bytes().all(|b| b.is_ascii_digit())
    }
}

impl From<String> for VerificationCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Debug for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerificationCode(\"{}\")", "*".repeat(self.0.len()))
    }
}
