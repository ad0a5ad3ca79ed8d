use chrono::Utc;
use galley_application::LinkedRecordRepository;
use galley_core::{AppError, NonEmptyString};
use galley_domain::{
    ChainDraft, ContactDraft, GroupDraft, RecordId, RecordTimestamps, ReferenceSet, Site,
    SiteDraft,
};
use serde_json::{Map, json};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use super::PostgresLinkedRecordRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres client record tests: {error}");
    }

    Some(pool)
}

fn name(value: &str) -> NonEmptyString {
    NonEmptyString::new(value).unwrap_or_else(|_| unreachable!())
}

#[tokio::test]
async fn group_round_trips_references_and_attributes() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresLinkedRecordRepository::new(pool);
    let mut attributes = Map::new();
    attributes.insert("groupPhone".to_owned(), json!("0161 000 0000"));

    let created = repository
        .create_group(GroupDraft {
            group_name: name("Harbour Group"),
            chains: ReferenceSet::new(),
            sites: ReferenceSet::new(),
            contacts: ReferenceSet::new(),
            attributes,
        })
        .await;
    assert!(created.is_ok());
    let mut group = created.unwrap_or_else(|_| unreachable!());

    let chain_id = RecordId::new();
    assert!(group.link_chain(chain_id));
    let saved = repository.save_group(group.clone()).await;
    assert!(saved.is_ok());

    let found = repository.find_group(group.id()).await;
    assert!(found.is_ok());
    let found = found
        .unwrap_or_default()
        .unwrap_or_else(|| unreachable!());
    assert_eq!(found.chains().as_slice(), &[chain_id]);
    assert_eq!(
        found.attributes().get("groupPhone"),
        Some(&json!("0161 000 0000"))
    );
}

#[tokio::test]
async fn chain_keeps_reference_order() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresLinkedRecordRepository::new(pool);
    let first = RecordId::new();
    let second = RecordId::new();

    let created = repository
        .create_chain(ChainDraft {
            chain_name: name("Harbour Diners"),
            groups: vec![first, second].into(),
            sites: ReferenceSet::new(),
            contacts: ReferenceSet::new(),
            attributes: Map::new(),
        })
        .await;
    assert!(created.is_ok());
    let chain = created.unwrap_or_else(|_| unreachable!());

    let found = repository
        .find_chain(chain.id())
        .await
        .unwrap_or_default()
        .unwrap_or_else(|| unreachable!());
    assert_eq!(found.group(), Some(first));
    assert_eq!(found.groups().as_slice(), &[first, second]);
}

#[tokio::test]
async fn contact_emails_are_stored_as_array() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresLinkedRecordRepository::new(pool);

    let created = repository
        .create_contact(ContactDraft {
            first_name: name("Ada"),
            last_name: name("Lovelace"),
            emails: vec!["a@b.com".to_owned()],
            groups: ReferenceSet::new(),
            chains: ReferenceSet::new(),
            sites: ReferenceSet::new(),
            attributes: Map::new(),
        })
        .await;
    assert!(created.is_ok());
    let contact = created.unwrap_or_else(|_| unreachable!());

    let found = repository
        .find_contact(contact.id())
        .await
        .unwrap_or_default()
        .unwrap_or_else(|| unreachable!());
    assert_eq!(found.emails(), &["a@b.com".to_owned()]);
}

#[tokio::test]
async fn saving_missing_site_is_not_found() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = PostgresLinkedRecordRepository::new(pool);
    let site = Site::new(
        RecordId::new(),
        SiteDraft {
            site_name: name("Quayside Kitchen"),
            groups: ReferenceSet::new(),
            chains: ReferenceSet::new(),
            contacts: ReferenceSet::new(),
            attributes: Map::new(),
        },
        RecordTimestamps::created(Utc::now()),
    );

    let missing = repository.find_site(site.id()).await;
    assert!(matches!(missing, Ok(None)));

    let saved = repository.save_site(site).await;
    assert!(matches!(saved, Err(AppError::NotFound(_))));
}
