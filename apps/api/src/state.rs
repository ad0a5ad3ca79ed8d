use galley_application::NewEntryService;
use sqlx::PgPool;

use crate::api_config::StoreBackend;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub new_entry_service: NewEntryService,
    pub store_backend: StoreBackend,
    pub postgres_pool: Option<PgPool>,
}
