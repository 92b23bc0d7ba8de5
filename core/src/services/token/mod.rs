//! Token service module for JWT management
//!
//! This module signs and verifies the two token classes:
//! - Session tokens (2 hours), proving a successful login
//! - Password-reset tokens (5 minutes), proving a forgot-password request
//!
//! Each class has its own key and audience and is never accepted in place of the other.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
