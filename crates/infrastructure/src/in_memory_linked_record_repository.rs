use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use galley_application::LinkedRecordRepository;
use galley_core::{AppError, AppResult};
use galley_domain::{
    Chain, ChainDraft, Contact, ContactDraft, Group, GroupDraft, RecordId, RecordTimestamps, Site,
    SiteDraft, Supplier, SupplierDraft,
};
use tokio::sync::RwLock;

/// In-memory client record repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryLinkedRecordRepository {
    groups: RwLock<HashMap<RecordId, Group>>,
    chains: RwLock<HashMap<RecordId, Chain>>,
    sites: RwLock<HashMap<RecordId, Site>>,
    contacts: RwLock<HashMap<RecordId, Contact>>,
    suppliers: RwLock<HashMap<RecordId, Supplier>>,
}

impl InMemoryLinkedRecordRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn created_now() -> RecordTimestamps {
    RecordTimestamps::created(Utc::now())
}

#[async_trait]
impl LinkedRecordRepository for InMemoryLinkedRecordRepository {
    async fn create_group(&self, draft: GroupDraft) -> AppResult<Group> {
        let group = Group::new(RecordId::new(), draft, created_now());
        self.groups.write().await.insert(group.id(), group.clone());
        Ok(group)
    }

    async fn create_chain(&self, draft: ChainDraft) -> AppResult<Chain> {
        let chain = Chain::new(RecordId::new(), draft, created_now());
        self.chains.write().await.insert(chain.id(), chain.clone());
        Ok(chain)
    }

    async fn create_site(&self, draft: SiteDraft) -> AppResult<Site> {
        let site = Site::new(RecordId::new(), draft, created_now());
        self.sites.write().await.insert(site.id(), site.clone());
        Ok(site)
    }

    async fn create_contact(&self, draft: ContactDraft) -> AppResult<Contact> {
        let contact = Contact::new(RecordId::new(), draft, created_now());
        self.contacts
            .write()
            .await
            .insert(contact.id(), contact.clone());
        Ok(contact)
    }

    async fn create_supplier(&self, draft: SupplierDraft) -> AppResult<Supplier> {
        let supplier = Supplier::new(RecordId::new(), draft, created_now());
        self.suppliers
            .write()
            .await
            .insert(supplier.id(), supplier.clone());
        Ok(supplier)
    }

    async fn find_group(&self, id: RecordId) -> AppResult<Option<Group>> {
        Ok(self.groups.read().await.get(&id).cloned())
    }

    async fn find_chain(&self, id: RecordId) -> AppResult<Option<Chain>> {
        Ok(self.chains.read().await.get(&id).cloned())
    }

    async fn find_site(&self, id: RecordId) -> AppResult<Option<Site>> {
        Ok(self.sites.read().await.get(&id).cloned())
    }

    async fn find_contact(&self, id: RecordId) -> AppResult<Option<Contact>> {
        Ok(self.contacts.read().await.get(&id).cloned())
    }

    async fn find_supplier(&self, id: RecordId) -> AppResult<Option<Supplier>> {
        Ok(self.suppliers.read().await.get(&id).cloned())
    }

    async fn save_group(&self, group: Group) -> AppResult<Group> {
        let mut groups = self.groups.write().await;
        let Some(stored) = groups.get_mut(&group.id()) else {
            return Err(AppError::NotFound(format!(
                "group '{}' does not exist",
                group.id()
            )));
        };

        let timestamps = stored.timestamps().touched(Utc::now());
        *stored = group.with_timestamps(timestamps);
        Ok(stored.clone())
    }

    async fn save_chain(&self, chain: Chain) -> AppResult<Chain> {
        let mut chains = self.chains.write().await;
        let Some(stored) = chains.get_mut(&chain.id()) else {
            return Err(AppError::NotFound(format!(
                "chain '{}' does not exist",
                chain.id()
            )));
        };

        let timestamps = stored.timestamps().touched(Utc::now());
        *stored = chain.with_timestamps(timestamps);
        Ok(stored.clone())
    }

    async fn save_site(&self, site: Site) -> AppResult<Site> {
        let mut sites = self.sites.write().await;
        let Some(stored) = sites.get_mut(&site.id()) else {
            return Err(AppError::NotFound(format!(
                "site '{}' does not exist",
                site.id()
            )));
        };

        let timestamps = stored.timestamps().touched(Utc::now());
        *stored = site.with_timestamps(timestamps);
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests;
