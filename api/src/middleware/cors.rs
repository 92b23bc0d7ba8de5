//! CORS middleware configuration for cross-origin requests.
//!
//! Browser front-ends call the API from their own origin. With no configured
//! origins every origin is allowed, which suits local development.

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Preflight cache lifetime in seconds
const MAX_AGE: usize = 3600;

/// Creates a CORS middleware for the configured origins.
pub fn create_cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(MAX_AGE);

    if allowed_origins.is_empty() {
        tracing::info!("Configuring CORS to allow any origin");
        return cors.allow_any_origin();
    }

    allowed_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .fold(cors, |cors, origin| {
            tracing::info!(origin, "Adding allowed origin");
            cors.allowed_origin(origin)
        })
}
