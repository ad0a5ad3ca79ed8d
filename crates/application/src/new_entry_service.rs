use std::sync::Arc;

use galley_domain::{Chain, Contact, Group, Site, Supplier};

use crate::LinkedRecordRepository;

mod commit;
mod lookup;
mod plan;

pub use plan::NewEntryPlan;

/// Records produced by one new-entry submission. Skipped records are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEntryOutcome {
    /// Created group, including back-patched references.
    pub group: Option<Group>,
    /// Created chain, including back-patched references.
    pub chain: Option<Chain>,
    /// Created site, including back-patched references.
    pub site: Option<Site>,
    /// Created contact.
    pub contact: Option<Contact>,
    /// Created supplier.
    pub supplier: Option<Supplier>,
}

impl NewEntryOutcome {
    /// Returns whether nothing was created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.group.is_none()
            && self.chain.is_none()
            && self.site.is_none()
            && self.contact.is_none()
            && self.supplier.is_none()
    }
}

/// Creates linked groups, chains, sites, contacts and suppliers from one submission.
///
/// Work happens in two phases. [`NewEntryPlan::from_input`] validates the
/// submission without touching the store; [`NewEntryService::commit`] creates
/// records parent-first and then back-patches parents with their new children.
/// A failing store call stops the sequence and earlier writes stay persisted.
#[derive(Clone)]
pub struct NewEntryService {
    repository: Arc<dyn LinkedRecordRepository>,
}

impl NewEntryService {
    /// Creates a new-entry service over the given record store.
    #[must_use]
    pub fn new(repository: Arc<dyn LinkedRecordRepository>) -> Self {
        Self { repository }
    }
}
