//! # MedAuth API
//!
//! actix-web transport for the account use cases of `ma_core`.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::auth::AppState;
