use super::*;

impl PostgresLinkedRecordRepository {
    pub(super) async fn save_group_impl(&self, group: Group) -> AppResult<Group> {
        let row = sqlx::query_as::<_, GroupRow>(
            r#"
            UPDATE client_groups
            SET group_name = $2,
                chain_ids = $3,
                site_ids = $4,
                contact_ids = $5,
                attributes = $6,
                updated_at = now()
            WHERE id = $1
            RETURNING id, group_name, chain_ids, site_ids, contact_ids, attributes,
                      created_at, updated_at
            "#,
        )
        .bind(group.id().as_uuid())
        .bind(group.group_name().as_str())
        .bind(group.chains().to_uuids())
        .bind(group.sites().to_uuids())
        .bind(group.contacts().to_uuids())
        .bind(Json(group.attributes()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to save group '{}': {error}", group.id()))
        })?
        .ok_or_else(|| AppError::NotFound(format!("group '{}' does not exist", group.id())))?;

        group_from_row(row)
    }

    pub(super) async fn save_chain_impl(&self, chain: Chain) -> AppResult<Chain> {
        let row = sqlx::query_as::<_, ChainRow>(
            r#"
            UPDATE client_chains
            SET chain_name = $2,
                group_ids = $3,
                site_ids = $4,
                contact_ids = $5,
                attributes = $6,
                updated_at = now()
            WHERE id = $1
            RETURNING id, chain_name, group_ids, site_ids, contact_ids, attributes,
                      created_at, updated_at
            "#,
        )
        .bind(chain.id().as_uuid())
        .bind(chain.chain_name().as_str())
        .bind(chain.groups().to_uuids())
        .bind(chain.sites().to_uuids())
        .bind(chain.contacts().to_uuids())
        .bind(Json(chain.attributes()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to save chain '{}': {error}", chain.id()))
        })?
        .ok_or_else(|| AppError::NotFound(format!("chain '{}' does not exist", chain.id())))?;

        chain_from_row(row)
    }

    pub(super) async fn save_site_impl(&self, site: Site) -> AppResult<Site> {
        let row = sqlx::query_as::<_, SiteRow>(
            r#"
            UPDATE client_sites
            SET site_name = $2,
                group_ids = $3,
                chain_ids = $4,
                contact_ids = $5,
                attributes = $6,
                updated_at = now()
            WHERE id = $1
            RETURNING id, site_name, group_ids, chain_ids, contact_ids, attributes,
                      created_at, updated_at
            "#,
        )
        .bind(site.id().as_uuid())
        .bind(site.site_name().as_str())
        .bind(site.groups().to_uuids())
        .bind(site.chains().to_uuids())
        .bind(site.contacts().to_uuids())
        .bind(Json(site.attributes()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to save site '{}': {error}", site.id()))
        })?
        .ok_or_else(|| AppError::NotFound(format!("site '{}' does not exist", site.id())))?;

        site_from_row(row)
    }
}
