use std::sync::Arc;

use chrono::Utc;
use galley_application::{
    ChainInput, GroupInput, LinkedRecordRepository, NewEntryInput, NewEntryService, SiteInput,
};
use galley_core::{AppError, NonEmptyString};
use galley_domain::{Group, GroupDraft, RecordId, RecordTimestamps, ReferenceSet, SupplierDraft};
use serde_json::Map;

use super::InMemoryLinkedRecordRepository;

fn group_draft(name: &str) -> GroupDraft {
    GroupDraft {
        group_name: NonEmptyString::new(name).unwrap_or_else(|_| unreachable!()),
        chains: ReferenceSet::new(),
        sites: ReferenceSet::new(),
        contacts: ReferenceSet::new(),
        attributes: Map::new(),
    }
}

#[tokio::test]
async fn created_records_are_found_by_id() {
    let repository = InMemoryLinkedRecordRepository::new();

    let group = repository.create_group(group_draft("G1")).await;
    assert!(group.is_ok());
    let group = group.unwrap_or_else(|_| unreachable!());

    let found = repository.find_group(group.id()).await;
    assert_eq!(found.ok().flatten(), Some(group));
}

#[tokio::test]
async fn suppliers_get_distinct_ids() {
    let repository = InMemoryLinkedRecordRepository::new();
    let draft = SupplierDraft {
        supplier_name: NonEmptyString::new("Steel Benches Co").unwrap_or_else(|_| unreachable!()),
        attributes: Map::new(),
    };

    let first = repository.create_supplier(draft.clone()).await;
    let second = repository.create_supplier(draft).await;

    let first_id = first.map(|supplier| supplier.id()).ok();
    let second_id = second.map(|supplier| supplier.id()).ok();
    assert!(first_id.is_some());
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn save_keeps_creation_time_and_advances_update_time() {
    let repository = InMemoryLinkedRecordRepository::new();
    let mut group = repository
        .create_group(group_draft("G1"))
        .await
        .unwrap_or_else(|_| unreachable!());
    let created_at = group.timestamps().created_at();

    group.link_site(RecordId::new());
    let saved = repository
        .save_group(group)
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(saved.timestamps().created_at(), created_at);
    assert!(saved.timestamps().updated_at() >= created_at);
    assert_eq!(saved.sites().len(), 1);
}

#[tokio::test]
async fn saving_unknown_group_is_not_found() {
    let repository = InMemoryLinkedRecordRepository::new();
    let detached = Group::new(
        RecordId::new(),
        group_draft("Ghost"),
        RecordTimestamps::created(Utc::now()),
    );

    let result = repository.save_group(detached).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn new_entry_back_patch_is_visible_through_the_store() {
    let repository = Arc::new(InMemoryLinkedRecordRepository::new());
    let service = NewEntryService::new(repository.clone());

    let outcome = service
        .create_entry(NewEntryInput {
            group: Some(GroupInput {
                group_name: Some("G1".to_owned()),
                ..GroupInput::default()
            }),
            chain: Some(ChainInput {
                chain_name: Some("C1".to_owned()),
                ..ChainInput::default()
            }),
            site: Some(SiteInput {
                site_name: Some("S1".to_owned()),
                ..SiteInput::default()
            }),
            ..NewEntryInput::default()
        })
        .await
        .unwrap_or_else(|_| unreachable!());

    let group_id = outcome.group.map(|group| group.id()).unwrap_or_default();
    let chain_id = outcome.chain.map(|chain| chain.id()).unwrap_or_default();
    let site_id = outcome.site.map(|site| site.id()).unwrap_or_default();

    let stored_group = repository
        .find_group(group_id)
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| unreachable!());
    assert_eq!(stored_group.chains().as_slice(), &[chain_id]);
    assert_eq!(stored_group.sites().as_slice(), &[site_id]);

    let stored_chain = repository
        .find_chain(chain_id)
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| unreachable!());
    assert_eq!(stored_chain.sites().as_slice(), &[site_id]);
}
