use std::sync::Arc;

use async_trait::async_trait;
use axum::Json;
use axum::body::Body;
use axum::extract::{FromRequest, Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use galley_application::{LinkedRecordRepository, NewEntryService};
use galley_core::{AppError, AppResult};
use galley_domain::{
    Chain, ChainDraft, Contact, ContactDraft, Group, GroupDraft, RecordId, Site, SiteDraft,
    Supplier, SupplierDraft,
};
use galley_infrastructure::InMemoryLinkedRecordRepository;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::api_config::StoreBackend;
use crate::dto::NewEntryRequest;
use crate::handlers::health::health_handler;
use crate::state::AppState;

use super::{get_entry_handler, new_entry_handler};

/// Delegates to the in-memory store but refuses to create contacts.
#[derive(Default)]
struct ContactOutageRepository {
    inner: InMemoryLinkedRecordRepository,
    created_groups: Mutex<Vec<RecordId>>,
}

#[async_trait]
impl LinkedRecordRepository for ContactOutageRepository {
    async fn create_group(&self, draft: GroupDraft) -> AppResult<Group> {
        let group = self.inner.create_group(draft).await?;
        self.created_groups.lock().await.push(group.id());
        Ok(group)
    }

    async fn create_chain(&self, draft: ChainDraft) -> AppResult<Chain> {
        self.inner.create_chain(draft).await
    }

    async fn create_site(&self, draft: SiteDraft) -> AppResult<Site> {
        self.inner.create_site(draft).await
    }

    async fn create_contact(&self, _draft: ContactDraft) -> AppResult<Contact> {
        Err(AppError::Internal("contact collection unavailable".to_owned()))
    }

    async fn create_supplier(&self, draft: SupplierDraft) -> AppResult<Supplier> {
        self.inner.create_supplier(draft).await
    }

    async fn find_group(&self, id: RecordId) -> AppResult<Option<Group>> {
        self.inner.find_group(id).await
    }

    async fn find_chain(&self, id: RecordId) -> AppResult<Option<Chain>> {
        self.inner.find_chain(id).await
    }

    async fn find_site(&self, id: RecordId) -> AppResult<Option<Site>> {
        self.inner.find_site(id).await
    }

    async fn find_contact(&self, id: RecordId) -> AppResult<Option<Contact>> {
        self.inner.find_contact(id).await
    }

    async fn find_supplier(&self, id: RecordId) -> AppResult<Option<Supplier>> {
        self.inner.find_supplier(id).await
    }

    async fn save_group(&self, group: Group) -> AppResult<Group> {
        self.inner.save_group(group).await
    }

    async fn save_chain(&self, chain: Chain) -> AppResult<Chain> {
        self.inner.save_chain(chain).await
    }

    async fn save_site(&self, site: Site) -> AppResult<Site> {
        self.inner.save_site(site).await
    }
}

fn state_with(repository: Arc<dyn LinkedRecordRepository>) -> AppState {
    AppState {
        new_entry_service: NewEntryService::new(repository),
        store_backend: StoreBackend::Memory,
        postgres_pool: None,
    }
}

fn memory_state() -> AppState {
    state_with(Arc::new(InMemoryLinkedRecordRepository::new()))
}

fn request(payload: Value) -> Json<NewEntryRequest> {
    Json(serde_json::from_value(payload).unwrap_or_else(|_| unreachable!()))
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_else(|_| unreachable!());
    serde_json::from_slice(&bytes).unwrap_or_else(|_| unreachable!())
}

async fn post_entry(state: AppState, payload: Value) -> Response {
    new_entry_handler(State(state), Ok(request(payload)))
        .await
        .into_response()
}

#[tokio::test]
async fn full_submission_links_every_record() {
    let response = post_entry(
        memory_state(),
        json!({
            "group": { "groupName": "Harbour Hospitality" },
            "chain": { "chainName": "Dockside Grills", "region": "South West" },
            "site": { "siteName": "Bristol Quay" },
            "contact": {
                "contactFirstName": "Ada",
                "contactLastName": "Byron",
                "contactEmails": "ada@example.com"
            },
            "supplier": { "supplierName": "Steel Benches Co" }
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));

    let data = &body["data"];
    let group_id = data["group"]["id"].clone();
    let chain_id = data["chain"]["id"].clone();
    let site_id = data["site"]["id"].clone();
    let contact_id = data["contact"]["id"].clone();

    assert_eq!(data["group"]["chains"], json!([chain_id]));
    assert_eq!(data["group"]["sites"], json!([site_id]));
    assert_eq!(data["group"]["contacts"], json!([contact_id]));
    assert_eq!(data["chain"]["group"], group_id);
    assert_eq!(data["chain"]["groups"], json!([group_id]));
    assert_eq!(data["chain"]["region"], json!("South West"));
    assert_eq!(data["site"]["chain"], chain_id);
    assert_eq!(data["site"]["contacts"], json!([contact_id]));
    assert_eq!(data["contact"]["site"], site_id);
    assert_eq!(data["contact"]["contactEmails"], json!(["ada@example.com"]));
    assert_eq!(data["supplier"]["supplierName"], json!("Steel Benches Co"));
    assert!(data["supplier"].get("groups").is_none());
}

#[tokio::test]
async fn payload_without_identity_fields_creates_nothing() {
    let response = post_entry(
        memory_state(),
        json!({
            "group": { "groupName": "   " },
            "contact": { "contactFirstName": "Ada" },
            "supplier": {}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(
        body["data"],
        json!({
            "group": null,
            "chain": null,
            "site": null,
            "contact": null,
            "supplier": null
        })
    );
}

#[tokio::test]
async fn contact_outage_keeps_parents_and_answers_bad_request() {
    let repository = Arc::new(ContactOutageRepository::default());
    let state = state_with(repository.clone());

    let response = post_entry(
        state.clone(),
        json!({
            "group": { "groupName": "Harbour Hospitality" },
            "chain": { "chainName": "Dockside Grills" },
            "site": { "siteName": "Bristol Quay" },
            "contact": { "contactFirstName": "Ada", "contactLastName": "Byron" }
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["error"],
        json!("internal error: contact collection unavailable")
    );

    let group_id = repository
        .created_groups
        .lock()
        .await
        .first()
        .copied()
        .unwrap_or_else(|| unreachable!());
    let lookup = get_entry_handler(
        State(state),
        Path(("groups".to_owned(), group_id.to_string())),
    )
    .await
    .into_response();
    assert_eq!(lookup.status(), StatusCode::OK);

    let stored = body_json(lookup).await;
    assert_eq!(stored["kind"], json!("group"));
    assert_eq!(stored["data"]["groupName"], json!("Harbour Hospitality"));
    assert_eq!(stored["data"]["chains"], json!([]));
}

#[tokio::test]
async fn malformed_reference_is_bad_request() {
    let response = post_entry(
        memory_state(),
        json!({
            "chain": { "chainName": "Dockside Grills", "groups": ["not-a-uuid"] }
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn unreadable_body_is_bad_request() {
    let raw = Request::builder()
        .method("POST")
        .uri("/api/newEntry")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"group\": "))
        .unwrap_or_else(|_| unreachable!());
    let payload = Json::<NewEntryRequest>::from_request(raw, &()).await;
    assert!(payload.is_err());

    let response = new_entry_handler(State(memory_state()), payload)
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().is_some_and(|error| !error.is_empty()));
}

#[tokio::test]
async fn lookup_reports_missing_and_unknown_kinds() {
    let missing = get_entry_handler(
        State(memory_state()),
        Path(("site".to_owned(), RecordId::new().to_string())),
    )
    .await
    .into_response();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(missing).await["success"], json!(false));

    let unknown = get_entry_handler(
        State(memory_state()),
        Path(("quotes".to_owned(), RecordId::new().to_string())),
    )
    .await
    .into_response();
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_memory_store() {
    let (status, Json(health)) = health_handler(State(memory_state())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(health.ready);
    assert_eq!(health.store.backend, "memory");
}
