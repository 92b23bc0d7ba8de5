//! Bearer token extraction from the Authorization header.

use actix_web::{http::header::AUTHORIZATION, HttpRequest};

/// Token carried as `Authorization: Bearer <token>`
///
/// Returns an empty string when the header is absent or uses another
/// scheme, so the token service reports it as an invalid session.
pub fn bearer_token(req: &HttpRequest) -> String {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| {
            let (scheme, token) = value.trim().split_once(' ')?;
            scheme.eq_ignore_ascii_case("bearer").then(|| token.trim().to_string())
        })
        .unwrap_or_default()
}
