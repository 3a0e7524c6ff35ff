use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use md_api::app::{create_app, AppState};
use md_api::telemetry::init_tracing;
use md_core::services::{AuthService, TokenService};
use md_infra::database::{DatabasePool, MySqlAccountRepository};
use md_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    tracing::info!(environment = %config.environment, "Starting My Dictionaries API server");
    if config.auth.jwt.is_using_default_secrets() {
        tracing::warn!("using development token secrets");
    }

    let pool = DatabasePool::new(&config.database)
        .await
        .context("failed to connect to database")?;
    pool.run_migrations().await?;

    let repository = Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));
    let token_service = Arc::new(TokenService::from_config(
        repository.clone(),
        &config.auth.jwt,
    )?);
    let auth_service = Arc::new(AuthService::new(repository, token_service));
    let state = web::Data::new(AppState::new(auth_service));

    let bind_address = config.server.bind_address();
    tracing::info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    tracing::info!("{}", pool.get_statistics());
    pool.close().await;
    Ok(())
}
