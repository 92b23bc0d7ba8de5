use actix_web::{web, HttpResponse};

use ma_core::repositories::UserRepository;
use ma_core::services::notification::Notifier;
use ma_core::services::verification::ExpiringKeyValueStore;

use super::AppState;
use crate::dto::message_response;
use crate::handlers::handle_domain_error;

/// Handler for GET /api/refresh-token/{token}
///
/// Returns a new session token for the same account with a fresh 2 hour
/// window.
///
/// ## Errors
/// - 401 Unauthorized: Session token invalid or expired
pub async fn refresh_token<U, S, N>(state: web::Data<AppState<U, S, N>>, path: web::Path<String>) -> HttpResponse
where
    U: UserRepository + 'static,
    S: ExpiringKeyValueStore + 'static,
    N: Notifier + 'static,
{
    match state.auth_service.refresh_token(&path).await {
        Ok(response) => HttpResponse::Ok().json(message_response(response)),
        Err(error) => handle_domain_error(error),
    }
}
