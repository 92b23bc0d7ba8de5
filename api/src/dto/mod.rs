//! Request and response bodies of the HTTP API

pub mod auth_dto;

pub use auth_dto::*;
pub use ma_shared::types::{ErrorResponse, MessageResponse};
