use actix_web::{error::InternalError, http::StatusCode, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use ma_core::errors::{DomainError, ErrorKind, ValidationError};
use ma_shared::types::ErrorResponse;

/// HTTP status for an error classification
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::AlreadyExists => StatusCode::CONFLICT,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Delivery => StatusCode::BAD_GATEWAY,
        ErrorKind::Store | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Store and internal detail is logged here and replaced by a generic reason.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(error.kind());

    if status.is_server_error() {
        tracing::error!(error = %error, status = status.as_u16(), "Request failed");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
    }

    let body = ErrorResponse::new(status.canonical_reason().unwrap_or("Error"), error.public_message());
    HttpResponse::build(status).json(body)
}

/// First failing field of a validator run as a domain error
pub fn validation_error(errors: &ValidationErrors) -> DomainError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    match fields.first() {
        Some((field, failures)) => {
            let reason = failures
                .first()
                .map(|failure| match &failure.message {
                    Some(message) => message.to_string(),
                    None => format!("failed {} check", failure.code),
                })
                .unwrap_or_else(|| "invalid value".to_string());
            ValidationError::invalid(*field, reason).into()
        }
        None => ValidationError::invalid("request", "invalid value").into(),
    }
}

/// Error handler for malformed JSON bodies
pub fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    let response = handle_domain_error(ValidationError::invalid("json request body", err.to_string()).into());
    InternalError::from_response(err, response).into()
}
