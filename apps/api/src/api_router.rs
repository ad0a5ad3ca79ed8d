use axum::Router;
use axum::routing::{get, post};
use galley_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/api/newEntry", post(handlers::entries::new_entry_handler))
        .route(
            "/api/entries/{kind}/{id}",
            get(handlers::entries::get_entry_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(frontend_url)?)
        .with_state(app_state))
}
