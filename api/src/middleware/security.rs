//! Security headers added to every response.

use actix_web::middleware::DefaultHeaders;

/// Headers that keep API responses out of frames, sniffers and caches
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "DENY"))
        .add(("Referrer-Policy", "no-referrer"))
        .add(("Cache-Control", "no-store"))
}
