//! Application factory
//!
//! Builds the actix-web application around a shared [`AppState`].

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use ma_core::repositories::UserRepository;
use ma_core::services::notification::Notifier;
use ma_core::services::verification::ExpiringKeyValueStore;
use ma_shared::types::ErrorResponse;

use crate::handlers::json_error_handler;
use crate::middleware::{cors::create_cors, security::security_headers};
use crate::routes::auth::{
    code::generate_code, forgot_password::forgot_password, login::login, refresh::refresh_token,
    reset_password::reset_password, signup::signup, validate::validate_token, verify::verify_account, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<U, S, N>(
    app_state: web::Data<AppState<U, S, N>>,
    allowed_origins: &[String],
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: ExpiringKeyValueStore + 'static,
    N: Notifier + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(security_headers())
        .wrap(create_cors(allowed_origins))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/login", web::post().to(login::<U, S, N>))
                .route("/signup", web::post().to(signup::<U, S, N>))
                .route("/code", web::get().to(generate_code::<U, S, N>))
                .route("/forgot-password", web::post().to(forgot_password::<U, S, N>))
                .route("/reset-password", web::post().to(reset_password::<U, S, N>))
                .route("/validate/{token}", web::get().to(validate_token::<U, S, N>))
                .route("/verify", web::post().to(verify_account::<U, S, N>))
                .route("/refresh-token/{token}", web::get().to(refresh_token::<U, S, N>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "medauth",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not Found", "the requested resource was not found"))
}
