use actix_web::{web, HttpResponse};

use ma_core::repositories::UserRepository;
use ma_core::services::notification::Notifier;
use ma_core::services::verification::ExpiringKeyValueStore;

use super::AppState;
use crate::dto::{message_response, EmailQuery};
use crate::handlers::handle_domain_error;

/// Handler for GET /api/code?email=
///
/// Mails a new signup verification code, or reports the remaining cooldown
/// in `data.retry_after` while a code is outstanding. Both are 200.
pub async fn generate_code<U, S, N>(state: web::Data<AppState<U, S, N>>, query: web::Query<EmailQuery>) -> HttpResponse
where
    U: UserRepository + 'static,
    S: ExpiringKeyValueStore + 'static,
    N: Notifier + 'static,
{
    match state.auth_service.generate_signup_verification_code(&query.email).await {
        Ok(response) => HttpResponse::Ok().json(message_response(response)),
        Err(error) => handle_domain_error(error),
    }
}
