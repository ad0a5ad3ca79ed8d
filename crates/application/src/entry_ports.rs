mod inputs;
mod repository;

pub use inputs::{ChainInput, ContactInput, GroupInput, NewEntryInput, SiteInput, SupplierInput};
pub use repository::LinkedRecordRepository;
