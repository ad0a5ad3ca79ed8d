use async_trait::async_trait;
use chrono::{DateTime, Utc};
use galley_application::LinkedRecordRepository;
use galley_core::{AppError, AppResult, NonEmptyString};
use galley_domain::{
    Attributes, Chain, ChainDraft, Contact, ContactDraft, Group, GroupDraft, RecordId,
    RecordTimestamps, ReferenceSet, Site, SiteDraft, Supplier, SupplierDraft,
};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

mod create;
mod read;
mod save;

/// PostgreSQL-backed client record repository.
///
/// Each entity kind lives in its own table; reference arrays are `uuid[]`
/// columns and free-form fields are a `jsonb` object.
#[derive(Clone)]
pub struct PostgresLinkedRecordRepository {
    pool: PgPool,
}

impl PostgresLinkedRecordRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GroupRow {
    id: Uuid,
    group_name: String,
    chain_ids: Vec<Uuid>,
    site_ids: Vec<Uuid>,
    contact_ids: Vec<Uuid>,
    attributes: Json<Attributes>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct ChainRow {
    id: Uuid,
    chain_name: String,
    group_ids: Vec<Uuid>,
    site_ids: Vec<Uuid>,
    contact_ids: Vec<Uuid>,
    attributes: Json<Attributes>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct SiteRow {
    id: Uuid,
    site_name: String,
    group_ids: Vec<Uuid>,
    chain_ids: Vec<Uuid>,
    contact_ids: Vec<Uuid>,
    attributes: Json<Attributes>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    emails: Vec<String>,
    group_ids: Vec<Uuid>,
    chain_ids: Vec<Uuid>,
    site_ids: Vec<Uuid>,
    attributes: Json<Attributes>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct SupplierRow {
    id: Uuid,
    supplier_name: String,
    attributes: Json<Attributes>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl LinkedRecordRepository for PostgresLinkedRecordRepository {
    async fn create_group(&self, draft: GroupDraft) -> AppResult<Group> {
        self.create_group_impl(draft).await
    }

    async fn create_chain(&self, draft: ChainDraft) -> AppResult<Chain> {
        self.create_chain_impl(draft).await
    }

    async fn create_site(&self, draft: SiteDraft) -> AppResult<Site> {
        self.create_site_impl(draft).await
    }

    async fn create_contact(&self, draft: ContactDraft) -> AppResult<Contact> {
        self.create_contact_impl(draft).await
    }

    async fn create_supplier(&self, draft: SupplierDraft) -> AppResult<Supplier> {
        self.create_supplier_impl(draft).await
    }

    async fn find_group(&self, id: RecordId) -> AppResult<Option<Group>> {
        self.find_group_impl(id).await
    }

    async fn find_chain(&self, id: RecordId) -> AppResult<Option<Chain>> {
        self.find_chain_impl(id).await
    }

    async fn find_site(&self, id: RecordId) -> AppResult<Option<Site>> {
        self.find_site_impl(id).await
    }

    async fn find_contact(&self, id: RecordId) -> AppResult<Option<Contact>> {
        self.find_contact_impl(id).await
    }

    async fn find_supplier(&self, id: RecordId) -> AppResult<Option<Supplier>> {
        self.find_supplier_impl(id).await
    }

    async fn save_group(&self, group: Group) -> AppResult<Group> {
        self.save_group_impl(group).await
    }

    async fn save_chain(&self, chain: Chain) -> AppResult<Chain> {
        self.save_chain_impl(chain).await
    }

    async fn save_site(&self, site: Site) -> AppResult<Site> {
        self.save_site_impl(site).await
    }
}

fn references(ids: Vec<Uuid>) -> ReferenceSet {
    ids.into_iter().map(RecordId::from_uuid).collect()
}

fn stored_name(kind: &str, id: Uuid, value: String) -> AppResult<NonEmptyString> {
    NonEmptyString::new(value).map_err(|error| {
        AppError::Internal(format!("stored {kind} '{id}' has an invalid name: {error}"))
    })
}

fn group_from_row(row: GroupRow) -> AppResult<Group> {
    Ok(Group::new(
        RecordId::from_uuid(row.id),
        GroupDraft {
            group_name: stored_name("group", row.id, row.group_name)?,
            chains: references(row.chain_ids),
            sites: references(row.site_ids),
            contacts: references(row.contact_ids),
            attributes: row.attributes.0,
        },
        RecordTimestamps::restore(row.created_at, row.updated_at),
    ))
}

fn chain_from_row(row: ChainRow) -> AppResult<Chain> {
    Ok(Chain::new(
        RecordId::from_uuid(row.id),
        ChainDraft {
            chain_name: stored_name("chain", row.id, row.chain_name)?,
            groups: references(row.group_ids),
            sites: references(row.site_ids),
            contacts: references(row.contact_ids),
            attributes: row.attributes.0,
        },
        RecordTimestamps::restore(row.created_at, row.updated_at),
    ))
}

fn site_from_row(row: SiteRow) -> AppResult<Site> {
    Ok(Site::new(
        RecordId::from_uuid(row.id),
        SiteDraft {
            site_name: stored_name("site", row.id, row.site_name)?,
            groups: references(row.group_ids),
            chains: references(row.chain_ids),
            contacts: references(row.contact_ids),
            attributes: row.attributes.0,
        },
        RecordTimestamps::restore(row.created_at, row.updated_at),
    ))
}

fn contact_from_row(row: ContactRow) -> AppResult<Contact> {
    Ok(Contact::new(
        RecordId::from_uuid(row.id),
        ContactDraft {
            first_name: stored_name("contact", row.id, row.first_name)?,
            last_name: stored_name("contact", row.id, row.last_name)?,
            emails: row.emails,
            groups: references(row.group_ids),
            chains: references(row.chain_ids),
            sites: references(row.site_ids),
            attributes: row.attributes.0,
        },
        RecordTimestamps::restore(row.created_at, row.updated_at),
    ))
}

fn supplier_from_row(row: SupplierRow) -> AppResult<Supplier> {
    Ok(Supplier::new(
        RecordId::from_uuid(row.id),
        SupplierDraft {
            supplier_name: stored_name("supplier", row.id, row.supplier_name)?,
            attributes: row.attributes.0,
        },
        RecordTimestamps::restore(row.created_at, row.updated_at),
    ))
}

#[cfg(test)]
mod tests;
