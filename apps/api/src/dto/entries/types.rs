use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

/// Incoming `POST /api/newEntry` payload. Every sub-object is optional.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/new-entry-request.ts"
)]
pub struct NewEntryRequest {
    pub group: Option<GroupRequest>,
    pub chain: Option<ChainRequest>,
    pub site: Option<SiteRequest>,
    pub contact: Option<ContactRequest>,
    pub supplier: Option<SupplierRequest>,
}

/// Incoming group sub-object of a new-entry payload.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/group-request.ts"
)]
#[serde(rename_all = "camelCase")]
pub struct GroupRequest {
    pub group_name: Option<String>,
    pub chains: Option<Vec<String>>,
    pub sites: Option<Vec<String>>,
    pub contacts: Option<Vec<String>>,
    /// Remaining entity-specific fields, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub attributes: Map<String, Value>,
}

/// Incoming chain sub-object of a new-entry payload.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/chain-request.ts"
)]
#[serde(rename_all = "camelCase")]
pub struct ChainRequest {
    pub chain_name: Option<String>,
    pub group: Option<String>,
    pub groups: Option<Vec<String>>,
    pub sites: Option<Vec<String>>,
    pub contacts: Option<Vec<String>>,
    /// Remaining entity-specific fields, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub attributes: Map<String, Value>,
}

/// Incoming site sub-object of a new-entry payload.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/site-request.ts"
)]
#[serde(rename_all = "camelCase")]
pub struct SiteRequest {
    pub site_name: Option<String>,
    pub group: Option<String>,
    pub groups: Option<Vec<String>>,
    pub chain: Option<String>,
    pub chains: Option<Vec<String>>,
    pub contacts: Option<Vec<String>>,
    /// Remaining entity-specific fields, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub attributes: Map<String, Value>,
}

/// Incoming contact sub-object of a new-entry payload.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/contact-request.ts"
)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub contact_first_name: Option<String>,
    pub contact_last_name: Option<String>,
    /// A single address, a list of addresses, or nothing.
    #[ts(type = "string | string[] | null")]
    pub contact_emails: Option<Value>,
    pub site: Option<String>,
    pub groups: Option<Vec<String>>,
    pub chains: Option<Vec<String>>,
    pub sites: Option<Vec<String>>,
    /// Remaining entity-specific fields, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub attributes: Map<String, Value>,
}

/// Incoming supplier sub-object of a new-entry payload.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/supplier-request.ts"
)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRequest {
    pub supplier_name: Option<String>,
    /// Remaining entity-specific fields, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub attributes: Map<String, Value>,
}

/// Successful new-entry response envelope.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/new-entry-response.ts"
)]
pub struct NewEntryResponse {
    pub success: bool,
    pub data: NewEntryData,
}

/// Records created by one submission; skipped records serialize as `null`.
#[derive(Debug, Default, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/new-entry-data.ts"
)]
pub struct NewEntryData {
    pub group: Option<GroupResponse>,
    pub chain: Option<ChainResponse>,
    pub site: Option<SiteResponse>,
    pub contact: Option<ContactResponse>,
    pub supplier: Option<SupplierResponse>,
}

/// Single record lookup response envelope.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/entry-response.ts"
)]
pub struct EntryResponse {
    pub success: bool,
    pub kind: &'static str,
    pub data: LinkedRecordResponse,
}

/// Any stored record, serialized without a tag.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/linked-record-response.ts"
)]
#[serde(untagged)]
pub enum LinkedRecordResponse {
    Group(GroupResponse),
    Chain(ChainResponse),
    Site(SiteResponse),
    Contact(ContactResponse),
    Supplier(SupplierResponse),
}

/// API representation of a stored group.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/group-response.ts"
)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub id: String,
    pub group_name: String,
    pub chains: Vec<String>,
    pub sites: Vec<String>,
    pub contacts: Vec<String>,
    /// Remaining entity-specific fields, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub attributes: Map<String, Value>,
    pub created_at: String,
    pub updated_at: String,
}

/// API representation of a stored chain.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/chain-response.ts"
)]
#[serde(rename_all = "camelCase")]
pub struct ChainResponse {
    pub id: String,
    pub chain_name: String,
    pub group: Option<String>,
    pub groups: Vec<String>,
    pub sites: Vec<String>,
    pub contacts: Vec<String>,
    /// Remaining entity-specific fields, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub attributes: Map<String, Value>,
    pub created_at: String,
    pub updated_at: String,
}

/// API representation of a stored site.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/site-response.ts"
)]
#[serde(rename_all = "camelCase")]
pub struct SiteResponse {
    pub id: String,
    pub site_name: String,
    pub group: Option<String>,
    pub groups: Vec<String>,
    pub chain: Option<String>,
    pub chains: Vec<String>,
    pub contacts: Vec<String>,
    /// Remaining entity-specific fields, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub attributes: Map<String, Value>,
    pub created_at: String,
    pub updated_at: String,
}

/// API representation of a stored contact.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/contact-response.ts"
)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub contact_emails: Vec<String>,
    pub site: Option<String>,
    pub groups: Vec<String>,
    pub chains: Vec<String>,
    pub sites: Vec<String>,
    /// Remaining entity-specific fields, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub attributes: Map<String, Value>,
    pub created_at: String,
    pub updated_at: String,
}

/// API representation of a stored supplier.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/supplier-response.ts"
)]
#[serde(rename_all = "camelCase")]
pub struct SupplierResponse {
    pub id: String,
    pub supplier_name: String,
    /// Remaining entity-specific fields, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub attributes: Map<String, Value>,
    pub created_at: String,
    pub updated_at: String,
}
