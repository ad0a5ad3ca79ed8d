use async_trait::async_trait;
use galley_core::AppResult;
use galley_domain::{
    Chain, ChainDraft, Contact, ContactDraft, Group, GroupDraft, RecordId, Site, SiteDraft,
    Supplier, SupplierDraft,
};

/// Port for the client-relationship document store.
///
/// Every collection assigns ids on `create`. `save` overwrites the stored
/// document with the given state and returns it with a fresh save instant.
#[async_trait]
pub trait LinkedRecordRepository: Send + Sync {
    /// Creates a group.
    async fn create_group(&self, draft: GroupDraft) -> AppResult<Group>;

    /// Creates a chain.
    async fn create_chain(&self, draft: ChainDraft) -> AppResult<Chain>;

    /// Creates a site.
    async fn create_site(&self, draft: SiteDraft) -> AppResult<Site>;

    /// Creates a contact.
    async fn create_contact(&self, draft: ContactDraft) -> AppResult<Contact>;

    /// Creates a supplier.
    async fn create_supplier(&self, draft: SupplierDraft) -> AppResult<Supplier>;

    /// Finds a group by id.
    async fn find_group(&self, id: RecordId) -> AppResult<Option<Group>>;

    /// Finds a chain by id.
    async fn find_chain(&self, id: RecordId) -> AppResult<Option<Chain>>;

    /// Finds a site by id.
    async fn find_site(&self, id: RecordId) -> AppResult<Option<Site>>;

    /// Finds a contact by id.
    async fn find_contact(&self, id: RecordId) -> AppResult<Option<Contact>>;

    /// Finds a supplier by id.
    async fn find_supplier(&self, id: RecordId) -> AppResult<Option<Supplier>>;

    /// Persists an existing group.
    async fn save_group(&self, group: Group) -> AppResult<Group>;

    /// Persists an existing chain.
    async fn save_chain(&self, chain: Chain) -> AppResult<Chain>;

    /// Persists an existing site.
    async fn save_site(&self, site: Site) -> AppResult<Site>;
}
