use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use ma_core::repositories::UserRepository;
use ma_core::services::notification::Notifier;
use ma_core::services::verification::ExpiringKeyValueStore;

use super::AppState;
use crate::dto::{message_response, VerifyAccountRequest};
use crate::handlers::{handle_domain_error, validation_error};
use crate::middleware::auth::bearer_token;

/// Handler for POST /api/verify
///
/// Body `{ "code": "04817263", "permission": "PATIENT" }` with
/// `Authorization: Bearer <session token>`.
///
/// ## Errors
/// - 400 Bad Request: Missing parameter, code expired or wrong
/// - 401 Unauthorized: Session token missing, invalid or stale
pub async fn verify_account<U, S, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, N>>,
    request: web::Json<VerifyAccountRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: ExpiringKeyValueStore + 'static,
    N: Notifier + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_domain_error(validation_error(&errors));
    }

    let token = bearer_token(&req);
    match state
        .auth_service
        .verify_account(&request.code, &request.permission, &token)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(message_response(response)),
        Err(error) => handle_domain_error(error),
    }
}
