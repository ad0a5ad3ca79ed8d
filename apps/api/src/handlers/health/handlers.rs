use super::checks::{check_postgres, in_process_status};
use super::*;

pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store = match &state.postgres_pool {
        Some(pool) => check_postgres(pool).await,
        None => in_process_status(state.store_backend.as_str()),
    };

    let ready = store.status == "ok";
    let status = if ready { "ok" } else { "degraded" };
    let http_status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        http_status,
        Json(HealthResponse {
            status,
            ready,
            store,
        }),
    )
}
