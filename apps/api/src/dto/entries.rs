mod conversions;
mod types;

pub use types::{EntryResponse, NewEntryRequest, NewEntryResponse};
