use galley_core::{AppError, AppResult};
use galley_domain::{EntityKind, LinkedRecord, RecordId};

use super::NewEntryService;

impl NewEntryService {
    /// Loads one stored record of the given kind.
    pub async fn find_record(&self, kind: EntityKind, id: RecordId) -> AppResult<LinkedRecord> {
        let record = match kind {
            EntityKind::Group => self
                .repository
                .find_group(id)
                .await?
                .map(LinkedRecord::Group),
            EntityKind::Chain => self
                .repository
                .find_chain(id)
                .await?
                .map(LinkedRecord::Chain),
            EntityKind::Site => self.repository.find_site(id).await?.map(LinkedRecord::Site),
            EntityKind::Contact => self
                .repository
                .find_contact(id)
                .await?
                .map(LinkedRecord::Contact),
            EntityKind::Supplier => self
                .repository
                .find_supplier(id)
                .await?
                .map(LinkedRecord::Supplier),
        };

        record.ok_or_else(|| AppError::NotFound(format!("{kind} '{id}' does not exist")))
    }
}
