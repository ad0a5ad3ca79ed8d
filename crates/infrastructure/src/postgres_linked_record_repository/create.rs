use super::*;

impl PostgresLinkedRecordRepository {
    pub(super) async fn create_group_impl(&self, draft: GroupDraft) -> AppResult<Group> {
        let row = sqlx::query_as::<_, GroupRow>(
            r#"
            INSERT INTO client_groups (group_name, chain_ids, site_ids, contact_ids, attributes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, group_name, chain_ids, site_ids, contact_ids, attributes,
                      created_at, updated_at
            "#,
        )
        .bind(draft.group_name.as_str())
        .bind(draft.chains.to_uuids())
        .bind(draft.sites.to_uuids())
        .bind(draft.contacts.to_uuids())
        .bind(Json(&draft.attributes))
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to create group '{}': {error}",
                draft.group_name
            ))
        })?;

        group_from_row(row)
    }

    pub(super) async fn create_chain_impl(&self, draft: ChainDraft) -> AppResult<Chain> {
        let row = sqlx::query_as::<_, ChainRow>(
            r#"
            INSERT INTO client_chains (chain_name, group_ids, site_ids, contact_ids, attributes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, chain_name, group_ids, site_ids, contact_ids, attributes,
                      created_at, updated_at
            "#,
        )
        .bind(draft.chain_name.as_str())
        .bind(draft.groups.to_uuids())
        .bind(draft.sites.to_uuids())
        .bind(draft.contacts.to_uuids())
        .bind(Json(&draft.attributes))
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to create chain '{}': {error}",
                draft.chain_name
            ))
        })?;

        chain_from_row(row)
    }

    pub(super) async fn create_site_impl(&self, draft: SiteDraft) -> AppResult<Site> {
        let row = sqlx::query_as::<_, SiteRow>(
            r#"
            INSERT INTO client_sites (site_name, group_ids, chain_ids, contact_ids, attributes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, site_name, group_ids, chain_ids, contact_ids, attributes,
                      created_at, updated_at
            "#,
        )
        .bind(draft.site_name.as_str())
        .bind(draft.groups.to_uuids())
        .bind(draft.chains.to_uuids())
        .bind(draft.contacts.to_uuids())
        .bind(Json(&draft.attributes))
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to create site '{}': {error}",
                draft.site_name
            ))
        })?;

        site_from_row(row)
    }

    pub(super) async fn create_contact_impl(&self, draft: ContactDraft) -> AppResult<Contact> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO client_contacts (
                first_name, last_name, emails, group_ids, chain_ids, site_ids, attributes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, emails, group_ids, chain_ids, site_ids,
                      attributes, created_at, updated_at
            "#,
        )
        .bind(draft.first_name.as_str())
        .bind(draft.last_name.as_str())
        .bind(&draft.emails)
        .bind(draft.groups.to_uuids())
        .bind(draft.chains.to_uuids())
        .bind(draft.sites.to_uuids())
        .bind(Json(&draft.attributes))
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to create contact '{} {}': {error}",
                draft.first_name, draft.last_name
            ))
        })?;

        contact_from_row(row)
    }

    pub(super) async fn create_supplier_impl(&self, draft: SupplierDraft) -> AppResult<Supplier> {
        let row = sqlx::query_as::<_, SupplierRow>(
            r#"
            INSERT INTO client_suppliers (supplier_name, attributes)
            VALUES ($1, $2)
            RETURNING id, supplier_name, attributes, created_at, updated_at
            "#,
        )
        .bind(draft.supplier_name.as_str())
        .bind(Json(&draft.attributes))
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to create supplier '{}': {error}",
                draft.supplier_name
            ))
        })?;

        supplier_from_row(row)
    }
}
