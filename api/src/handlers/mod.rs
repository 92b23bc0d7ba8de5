//! Translation of domain results into HTTP responses

pub mod error;

pub use error::{handle_domain_error, json_error_handler, status_for, validation_error};
