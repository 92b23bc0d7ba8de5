use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use ma_api::{create_app, AppState};
use ma_core::repositories::{InMemoryUserRepository, UserRepository};
use ma_core::services::auth::{AuthService, AuthServiceConfig};
use ma_core::services::token::{TokenService, TokenServiceConfig};
use ma_core::services::verification::{
    CodeStoreConfig, ExpiringKeyValueStore, InMemoryKeyValueStore, VerificationCodeStore,
};
use ma_infra::cache::{RedisClient, RedisCodeStore};
use ma_infra::database::{DatabasePool, MySqlUserRepository};
use ma_infra::email::EmailNotifier;
use ma_shared::config::{AppConfig, LogFormat, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);
    config.validate().context("invalid configuration")?;

    tracing::info!(environment = %config.environment, "Starting MedAuth API server");

    let storage = std::env::var("MEDAUTH_STORAGE").unwrap_or_default();
    if storage.eq_ignore_ascii_case("memory") {
        tracing::warn!("MEDAUTH_STORAGE=memory, accounts and codes are kept in process memory");
        serve(config, InMemoryUserRepository::new(), InMemoryKeyValueStore::new()).await
    } else {
        let pool = DatabasePool::new(config.database.clone())
            .await
            .context("failed to connect to MySQL")?;
        pool.run_migrations().await.context("failed to run migrations")?;
        tracing::info!(pool = %pool.get_statistics(), "MySQL pool ready");
        let redis = RedisClient::new(config.cache.clone())
            .await
            .context("failed to connect to Redis")?;

        let result = serve(
            config,
            MySqlUserRepository::new(pool.get_pool().clone()),
            RedisCodeStore::new(redis),
        )
        .await;
        pool.close().await;
        result
    }
}

async fn serve<U, S>(config: AppConfig, users: U, store: S) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
    S: ExpiringKeyValueStore + 'static,
{
    let token_service = TokenService::new(TokenServiceConfig::from(&config.auth.jwt))
        .context("failed to initialise token service")?;
    let code_store = VerificationCodeStore::new(Arc::new(store), CodeStoreConfig::from(&config.verification));
    let notifier = EmailNotifier::from_config(&config.email).context("failed to configure email")?;

    let auth_service = AuthService::new(
        Arc::new(users),
        Arc::new(token_service),
        Arc::new(code_store),
        Arc::new(notifier),
        AuthServiceConfig::from_app_config(&config),
    );
    let state = web::Data::new(AppState::new(auth_service));

    let bind_address = config.server.bind_address();
    let allowed_origins = config.server.allowed_origins.clone();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone(), &allowed_origins));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}
