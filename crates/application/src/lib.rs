//! Application services and ports.

#![forbid(unsafe_code)]

mod entry_ports;
mod new_entry_service;

pub use entry_ports::{
    ChainInput, ContactInput, GroupInput, LinkedRecordRepository, NewEntryInput, SiteInput,
    SupplierInput,
};
pub use new_entry_service::{NewEntryOutcome, NewEntryPlan, NewEntryService};
