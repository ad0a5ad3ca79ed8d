use galley_application::{
    ChainInput, ContactInput, GroupInput, NewEntryInput, NewEntryOutcome, SiteInput, SupplierInput,
};
use galley_domain::{
    Attributes, Chain, Contact, Group, LinkedRecord, RecordId, RecordTimestamps, ReferenceSet,
    Site, Supplier,
};
use serde_json::{Map, Value};

use super::types::{
    ChainRequest, ChainResponse, ContactRequest, ContactResponse, GroupRequest, GroupResponse,
    LinkedRecordResponse, NewEntryData, NewEntryRequest, SiteRequest, SiteResponse,
    SupplierRequest, SupplierResponse,
};

/// Keys owned by the store that a client may not smuggle in as attributes.
const RESERVED_ATTRIBUTE_KEYS: [&str; 5] = ["id", "_id", "createdAt", "updatedAt", "__v"];

fn client_attributes(mut attributes: Map<String, Value>) -> Attributes {
    for key in RESERVED_ATTRIBUTE_KEYS {
        attributes.remove(key);
    }
    attributes
}

fn id_strings(references: &ReferenceSet) -> Vec<String> {
    references.as_slice().iter().map(ToString::to_string).collect()
}

fn id_string(id: Option<RecordId>) -> Option<String> {
    id.map(|id| id.to_string())
}

fn stamps(timestamps: RecordTimestamps) -> (String, String) {
    (
        timestamps.created_at().to_rfc3339(),
        timestamps.updated_at().to_rfc3339(),
    )
}

impl From<NewEntryRequest> for NewEntryInput {
    fn from(value: NewEntryRequest) -> Self {
        Self {
            group: value.group.map(GroupInput::from),
            chain: value.chain.map(ChainInput::from),
            site: value.site.map(SiteInput::from),
            contact: value.contact.map(ContactInput::from),
            supplier: value.supplier.map(SupplierInput::from),
        }
    }
}

impl From<GroupRequest> for GroupInput {
    fn from(value: GroupRequest) -> Self {
        Self {
            group_name: value.group_name,
            chains: value.chains.unwrap_or_default(),
            sites: value.sites.unwrap_or_default(),
            contacts: value.contacts.unwrap_or_default(),
            attributes: client_attributes(value.attributes),
        }
    }
}

impl From<ChainRequest> for ChainInput {
    fn from(value: ChainRequest) -> Self {
        Self {
            chain_name: value.chain_name,
            group: value.group,
            groups: value.groups.unwrap_or_default(),
            sites: value.sites.unwrap_or_default(),
            contacts: value.contacts.unwrap_or_default(),
            attributes: client_attributes(value.attributes),
        }
    }
}

impl From<SiteRequest> for SiteInput {
    fn from(value: SiteRequest) -> Self {
        Self {
            site_name: value.site_name,
            group: value.group,
            groups: value.groups.unwrap_or_default(),
            chain: value.chain,
            chains: value.chains.unwrap_or_default(),
            contacts: value.contacts.unwrap_or_default(),
            attributes: client_attributes(value.attributes),
        }
    }
}

impl From<ContactRequest> for ContactInput {
    fn from(value: ContactRequest) -> Self {
        Self {
            first_name: value.contact_first_name,
            last_name: value.contact_last_name,
            emails: value.contact_emails,
            site: value.site,
            groups: value.groups.unwrap_or_default(),
            chains: value.chains.unwrap_or_default(),
            sites: value.sites.unwrap_or_default(),
            attributes: client_attributes(value.attributes),
        }
    }
}

impl From<SupplierRequest> for SupplierInput {
    fn from(value: SupplierRequest) -> Self {
        Self {
            supplier_name: value.supplier_name,
            attributes: client_attributes(value.attributes),
        }
    }
}

impl From<Group> for GroupResponse {
    fn from(value: Group) -> Self {
        let (created_at, updated_at) = stamps(value.timestamps());
        Self {
            id: value.id().to_string(),
            group_name: value.group_name().as_str().to_owned(),
            chains: id_strings(value.chains()),
            sites: id_strings(value.sites()),
            contacts: id_strings(value.contacts()),
            attributes: value.attributes().clone(),
            created_at,
            updated_at,
        }
    }
}

impl From<Chain> for ChainResponse {
    fn from(value: Chain) -> Self {
        let (created_at, updated_at) = stamps(value.timestamps());
        Self {
            id: value.id().to_string(),
            chain_name: value.chain_name().as_str().to_owned(),
            group: id_string(value.group()),
            groups: id_strings(value.groups()),
            sites: id_strings(value.sites()),
            contacts: id_strings(value.contacts()),
            attributes: value.attributes().clone(),
            created_at,
            updated_at,
        }
    }
}

impl From<Site> for SiteResponse {
    fn from(value: Site) -> Self {
        let (created_at, updated_at) = stamps(value.timestamps());
        Self {
            id: value.id().to_string(),
            site_name: value.site_name().as_str().to_owned(),
            group: id_string(value.group()),
            groups: id_strings(value.groups()),
            chain: id_string(value.chain()),
            chains: id_strings(value.chains()),
            contacts: id_strings(value.contacts()),
            attributes: value.attributes().clone(),
            created_at,
            updated_at,
        }
    }
}

impl From<Contact> for ContactResponse {
    fn from(value: Contact) -> Self {
        let (created_at, updated_at) = stamps(value.timestamps());
        Self {
            id: value.id().to_string(),
            contact_first_name: value.first_name().as_str().to_owned(),
            contact_last_name: value.last_name().as_str().to_owned(),
            contact_emails: value.emails().to_vec(),
            site: id_string(value.site()),
            groups: id_strings(value.groups()),
            chains: id_strings(value.chains()),
            sites: id_strings(value.sites()),
            attributes: value.attributes().clone(),
            created_at,
            updated_at,
        }
    }
}

impl From<Supplier> for SupplierResponse {
    fn from(value: Supplier) -> Self {
        let (created_at, updated_at) = stamps(value.timestamps());
        Self {
            id: value.id().to_string(),
            supplier_name: value.supplier_name().as_str().to_owned(),
            attributes: value.attributes().clone(),
            created_at,
            updated_at,
        }
    }
}

impl From<NewEntryOutcome> for NewEntryData {
    fn from(value: NewEntryOutcome) -> Self {
        Self {
            group: value.group.map(GroupResponse::from),
            chain: value.chain.map(ChainResponse::from),
            site: value.site.map(SiteResponse::from),
            contact: value.contact.map(ContactResponse::from),
            supplier: value.supplier.map(SupplierResponse::from),
        }
    }
}

impl From<LinkedRecord> for LinkedRecordResponse {
    fn from(value: LinkedRecord) -> Self {
        match value {
            LinkedRecord::Group(group) => Self::Group(group.into()),
            LinkedRecord::Chain(chain) => Self::Chain(chain.into()),
            LinkedRecord::Site(site) => Self::Site(site.into()),
            LinkedRecord::Contact(contact) => Self::Contact(contact.into()),
            LinkedRecord::Supplier(supplier) => Self::Supplier(supplier.into()),
        }
    }
}
