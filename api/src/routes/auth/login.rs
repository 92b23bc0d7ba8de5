use actix_web::{web, HttpResponse};
use validator::Validate;

use ma_core::repositories::UserRepository;
use ma_core::services::notification::Notifier;
use ma_core::services::verification::ExpiringKeyValueStore;

use super::AppState;
use crate::dto::{message_response, CredentialsRequest};
use crate::handlers::{handle_domain_error, validation_error};

/// Handler for POST /api/login
///
/// # Request Body
///
/// ```json
/// {
///     "email": "nina@clinic.org",
///     "password": "secret",
///     "permission": "DOCTOR"
/// }
/// ```
///
/// `phone` may be sent instead of, or along with, `email`.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "user logged in successfully",
///     "token": "eyJ...",
///     "user": { "id": 7, "email": "nina@clinic.org", "permission": "DOCTOR", "status": "PENDING", ... }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or invalid parameter
/// - 401 Unauthorized: Wrong password
/// - 404 Not Found: No account for this identity and permission
pub async fn login<U, S, N>(state: web::Data<AppState<U, S, N>>, request: web::Json<CredentialsRequest>) -> HttpResponse
where
    U: UserRepository + 'static,
    S: ExpiringKeyValueStore + 'static,
    N: Notifier + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_domain_error(validation_error(&errors));
    }

    match state.auth_service.login(request.into()).await {
        Ok(response) => HttpResponse::Ok().json(message_response(response)),
        Err(error) => handle_domain_error(error),
    }
}
