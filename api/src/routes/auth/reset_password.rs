use actix_web::{web, HttpResponse};
use validator::Validate;

use ma_core::repositories::UserRepository;
use ma_core::services::notification::Notifier;
use ma_core::services::verification::ExpiringKeyValueStore;

use super::AppState;
use crate::dto::{message_response, ResetPasswordRequest, TokenQuery};
use crate::handlers::{handle_domain_error, validation_error};

/// Handler for POST /api/reset-password?token=
///
/// Body `{ "password": "...", "permission": "PATIENT" }`; the token comes
/// from the mailed reset link.
///
/// ## Errors
/// - 400 Bad Request: Missing parameter, or reset token invalid or expired
/// - 401 Unauthorized: Password changed since the link was issued
pub async fn reset_password<U, S, N>(
    state: web::Data<AppState<U, S, N>>,
    query: web::Query<TokenQuery>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: ExpiringKeyValueStore + 'static,
    N: Notifier + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_domain_error(validation_error(&errors));
    }

    match state
        .auth_service
        .reset_password(&request.permission, &request.password, &query.token)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(message_response(response)),
        Err(error) => handle_domain_error(error),
    }
}
