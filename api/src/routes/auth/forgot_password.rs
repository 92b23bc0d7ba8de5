use actix_web::{web, HttpResponse};
use validator::Validate;

use ma_core::repositories::UserRepository;
use ma_core::services::notification::Notifier;
use ma_core::services::verification::ExpiringKeyValueStore;

use super::AppState;
use crate::dto::{message_response, ForgotPasswordRequest};
use crate::handlers::{handle_domain_error, validation_error};

/// Handler for POST /api/forgot-password
///
/// Body `{ "email": "...", "permission": "PATIENT" }`. Mails a reset link
/// valid for 5 minutes.
///
/// ## Errors
/// - 400 Bad Request: Missing or invalid parameter
/// - 404 Not Found: No account for this email and permission
pub async fn forgot_password<U, S, N>(
    state: web::Data<AppState<U, S, N>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: ExpiringKeyValueStore + 'static,
    N: Notifier + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_domain_error(validation_error(&errors));
    }

    match state.auth_service.forgot_password(&request.email, &request.permission).await {
        Ok(response) => HttpResponse::Ok().json(message_response(response)),
        Err(error) => handle_domain_error(error),
    }
}
