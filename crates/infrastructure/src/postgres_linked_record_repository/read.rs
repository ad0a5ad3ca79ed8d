use super::*;

impl PostgresLinkedRecordRepository {
    pub(super) async fn find_group_impl(&self, id: RecordId) -> AppResult<Option<Group>> {
        sqlx::query_as::<_, GroupRow>(
            r#"
            SELECT id, group_name, chain_ids, site_ids, contact_ids, attributes,
                   created_at, updated_at
            FROM client_groups
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load group '{id}': {error}")))?
        .map(group_from_row)
        .transpose()
    }

    pub(super) async fn find_chain_impl(&self, id: RecordId) -> AppResult<Option<Chain>> {
        sqlx::query_as::<_, ChainRow>(
            r#"
            SELECT id, chain_name, group_ids, site_ids, contact_ids, attributes,
                   created_at, updated_at
            FROM client_chains
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load chain '{id}': {error}")))?
        .map(chain_from_row)
        .transpose()
    }

    pub(super) async fn find_site_impl(&self, id: RecordId) -> AppResult<Option<Site>> {
        sqlx::query_as::<_, SiteRow>(
            r#"
            SELECT id, site_name, group_ids, chain_ids, contact_ids, attributes,
                   created_at, updated_at
            FROM client_sites
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load site '{id}': {error}")))?
        .map(site_from_row)
        .transpose()
    }

    pub(super) async fn find_contact_impl(&self, id: RecordId) -> AppResult<Option<Contact>> {
        sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, first_name, last_name, emails, group_ids, chain_ids, site_ids,
                   attributes, created_at, updated_at
            FROM client_contacts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load contact '{id}': {error}")))?
        .map(contact_from_row)
        .transpose()
    }

    pub(super) async fn find_supplier_impl(&self, id: RecordId) -> AppResult<Option<Supplier>> {
        sqlx::query_as::<_, SupplierRow>(
            r#"
            SELECT id, supplier_name, attributes, created_at, updated_at
            FROM client_suppliers
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load supplier '{id}': {error}")))?
        .map(supplier_from_row)
        .transpose()
    }
}
