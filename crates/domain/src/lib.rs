//! Domain records and invariants for kitchen survey client data.

#![forbid(unsafe_code)]

mod client;
mod record;

pub use client::{
    Attributes, Chain, ChainDraft, Contact, ContactDraft, Group, GroupDraft, LinkedRecord, Site,
    SiteDraft, Supplier, SupplierDraft, normalize_contact_emails,
};
pub use record::{EntityKind, RecordId, RecordTimestamps, ReferenceSet};
