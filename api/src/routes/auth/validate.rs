use actix_web::{web, HttpResponse};
use serde_json::json;

use ma_core::repositories::UserRepository;
use ma_core::services::notification::Notifier;
use ma_core::services::verification::ExpiringKeyValueStore;
use ma_shared::types::MessageResponse;

use super::AppState;
use crate::handlers::handle_domain_error;

/// Handler for GET /api/validate/{token}
///
/// 200 with `data.valid` for a well-signed, unexpired session token;
/// 401 otherwise.
pub async fn validate_token<U, S, N>(state: web::Data<AppState<U, S, N>>, path: web::Path<String>) -> HttpResponse
where
    U: UserRepository + 'static,
    S: ExpiringKeyValueStore + 'static,
    N: Notifier + 'static,
{
    match state.auth_service.validate_token(&path).await {
        Ok(valid) => {
            let body: MessageResponse = MessageResponse::new("token validated").with_data(json!({ "valid": valid }));
            HttpResponse::Ok().json(body)
        }
        Err(error) => handle_domain_error(error),
    }
}
