mod common;
mod entries;

pub use common::{HealthDependencyStatus, HealthResponse};
pub use entries::{EntryResponse, NewEntryRequest, NewEntryResponse};
