use std::sync::Arc;

use galley_application::{LinkedRecordRepository, NewEntryService};
use galley_infrastructure::{InMemoryLinkedRecordRepository, PostgresLinkedRecordRepository};
use sqlx::PgPool;

use crate::api_config::StoreBackend;
use crate::state::AppState;

pub fn build_app_state(store_backend: StoreBackend, postgres_pool: Option<PgPool>) -> AppState {
    let repository: Arc<dyn LinkedRecordRepository> = match &postgres_pool {
        Some(pool) => Arc::new(PostgresLinkedRecordRepository::new(pool.clone())),
        None => Arc::new(InMemoryLinkedRecordRepository::new()),
    };

    AppState {
        new_entry_service: NewEntryService::new(repository),
        store_backend,
        postgres_pool,
    }
}
