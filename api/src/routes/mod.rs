//! HTTP routes

pub mod auth;
