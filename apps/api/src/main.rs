//! Galley API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dto;
mod error;
mod handlers;
mod state;

use galley_core::AppError;
use tracing::info;

use crate::api_config::{ApiConfig, StoreBackend, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let postgres_pool = match config.store_backend {
        StoreBackend::Postgres => Some(api_services::connect_and_migrate(&config).await?),
        StoreBackend::Memory => None,
    };

    if config.migrate_only {
        if postgres_pool.is_none() {
            return Err(AppError::Validation(
                "migrate requires STORE_BACKEND=postgres".to_owned(),
            ));
        }

        info!("database migrations applied successfully");
        return Ok(());
    }

    let app_state = api_services::build_app_state(config.store_backend, postgres_pool);
    let app = api_router::build_router(app_state, &config.frontend_url)?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, store = config.store_backend.as_str(), "galley-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
