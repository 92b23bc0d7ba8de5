//! Password hashing module
//!
//! One-way bcrypt hashing and verification, plus the fingerprint of a stored
//! hash that token claims carry instead of the hash itself.

mod hasher;

#[cfg(test)]
mod tests;

pub use hasher::{PasswordHasher, DEFAULT_COST};
