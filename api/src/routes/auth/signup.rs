use actix_web::{web, HttpResponse};
use validator::Validate;

use ma_core::repositories::UserRepository;
use ma_core::services::notification::Notifier;
use ma_core::services::verification::ExpiringKeyValueStore;

use super::AppState;
use crate::dto::{message_response, CredentialsRequest};
use crate::handlers::{handle_domain_error, validation_error};

/// Handler for POST /api/signup
///
/// Same body as login. Creates a `PENDING` account and mails a verification
/// code when an email was given.
///
/// ## Success (201 Created)
/// ```json
/// {
///     "message": "user created successfully, please verify your registered email",
///     "user": { "id": 7, "status": "PENDING", ... }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or invalid parameter
/// - 409 Conflict: Account already exists for this identity and permission
pub async fn signup<U, S, N>(state: web::Data<AppState<U, S, N>>, request: web::Json<CredentialsRequest>) -> HttpResponse
where
    U: UserRepository + 'static,
    S: ExpiringKeyValueStore + 'static,
    N: Notifier + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_domain_error(validation_error(&errors));
    }

    match state.auth_service.signup(request.into()).await {
        Ok(response) => HttpResponse::Created().json(message_response(response)),
        Err(error) => handle_domain_error(error),
    }
}
