//! Cross-cutting request handling: CORS, security headers, bearer extraction

pub mod auth;
pub mod cors;
pub mod security;
