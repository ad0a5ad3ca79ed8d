//! Client-relationship records: groups, chains, sites, contacts and suppliers.
//!
//! Relationships are held only as [`ReferenceSet`] arrays. The singular
//! reference fields older clients still read (`chain.group`, `site.group`,
//! `site.chain`, `contact.site`) are derived from the first array element.

use galley_core::{AppError, AppResult, NonEmptyString};
use serde_json::{Map, Value};

use crate::record::{EntityKind, RecordId, RecordTimestamps, ReferenceSet};

/// Free-form entity-specific fields kept alongside the typed ones.
pub type Attributes = Map<String, Value>;

/// Validated values for a group about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDraft {
    /// Group display name.
    pub group_name: NonEmptyString,
    /// Chains belonging to the group.
    pub chains: ReferenceSet,
    /// Sites belonging to the group.
    pub sites: ReferenceSet,
    /// Contacts attached to the group.
    pub contacts: ReferenceSet,
    /// Remaining entity-specific fields.
    pub attributes: Attributes,
}

/// Validated values for a chain about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainDraft {
    /// Chain display name.
    pub chain_name: NonEmptyString,
    /// Owning groups.
    pub groups: ReferenceSet,
    /// Sites operated by the chain.
    pub sites: ReferenceSet,
    /// Contacts attached to the chain.
    pub contacts: ReferenceSet,
    /// Remaining entity-specific fields.
    pub attributes: Attributes,
}

/// Validated values for a site about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteDraft {
    /// Site display name.
    pub site_name: NonEmptyString,
    /// Owning groups.
    pub groups: ReferenceSet,
    /// Owning chains.
    pub chains: ReferenceSet,
    /// Contacts attached to the site.
    pub contacts: ReferenceSet,
    /// Remaining entity-specific fields.
    pub attributes: Attributes,
}

/// Validated values for a contact about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDraft {
    /// Given name.
    pub first_name: NonEmptyString,
    /// Family name.
    pub last_name: NonEmptyString,
    /// Normalized email list, see [`normalize_contact_emails`].
    pub emails: Vec<String>,
    /// Linked groups.
    pub groups: ReferenceSet,
    /// Linked chains.
    pub chains: ReferenceSet,
    /// Linked sites.
    pub sites: ReferenceSet,
    /// Remaining entity-specific fields.
    pub attributes: Attributes,
}

/// Validated values for a supplier about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierDraft {
    /// Supplier display name.
    pub supplier_name: NonEmptyString,
    /// Remaining entity-specific fields.
    pub attributes: Attributes,
}

/// Persisted client group.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    id: RecordId,
    draft: GroupDraft,
    timestamps: RecordTimestamps,
}

impl Group {
    /// Builds a stored group from its id, values and timestamps.
    #[must_use]
    pub fn new(id: RecordId, draft: GroupDraft, timestamps: RecordTimestamps) -> Self {
        Self {
            id,
            draft,
            timestamps,
        }
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the group name.
    #[must_use]
    pub fn group_name(&self) -> &NonEmptyString {
        &self.draft.group_name
    }

    /// Returns linked chains.
    #[must_use]
    pub fn chains(&self) -> &ReferenceSet {
        &self.draft.chains
    }

    /// Returns linked sites.
    #[must_use]
    pub fn sites(&self) -> &ReferenceSet {
        &self.draft.sites
    }

    /// Returns linked contacts.
    #[must_use]
    pub fn contacts(&self) -> &ReferenceSet {
        &self.draft.contacts
    }

    /// Returns the free-form attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.draft.attributes
    }

    /// Returns creation and save instants.
    #[must_use]
    pub fn timestamps(&self) -> RecordTimestamps {
        self.timestamps
    }

    /// Links a chain. Returns whether the reference was new.
    pub fn link_chain(&mut self, chain_id: RecordId) -> bool {
        self.draft.chains.insert(chain_id)
    }

    /// Links a site. Returns whether the reference was new.
    pub fn link_site(&mut self, site_id: RecordId) -> bool {
        self.draft.sites.insert(site_id)
    }

    /// Links a contact. Returns whether the reference was new.
    pub fn link_contact(&mut self, contact_id: RecordId) -> bool {
        self.draft.contacts.insert(contact_id)
    }

    /// Returns a copy carrying new timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, timestamps: RecordTimestamps) -> Self {
        self.timestamps = timestamps;
        self
    }
}

/// Persisted chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    id: RecordId,
    draft: ChainDraft,
    timestamps: RecordTimestamps,
}

impl Chain {
    /// Builds a stored chain from its id, values and timestamps.
    #[must_use]
    pub fn new(id: RecordId, draft: ChainDraft, timestamps: RecordTimestamps) -> Self {
        Self {
            id,
            draft,
            timestamps,
        }
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the chain name.
    #[must_use]
    pub fn chain_name(&self) -> &NonEmptyString {
        &self.draft.chain_name
    }

    /// Returns owning groups.
    #[must_use]
    pub fn groups(&self) -> &ReferenceSet {
        &self.draft.groups
    }

    /// Legacy singular group reference.
    #[must_use]
    pub fn group(&self) -> Option<RecordId> {
        self.draft.groups.first()
    }

    /// Returns linked sites.
    #[must_use]
    pub fn sites(&self) -> &ReferenceSet {
        &self.draft.sites
    }

    /// Returns linked contacts.
    #[must_use]
    pub fn contacts(&self) -> &ReferenceSet {
        &self.draft.contacts
    }

    /// Returns the free-form attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.draft.attributes
    }

    /// Returns creation and save instants.
    #[must_use]
    pub fn timestamps(&self) -> RecordTimestamps {
        self.timestamps
    }

    /// Links a site. Returns whether the reference was new.
    pub fn link_site(&mut self, site_id: RecordId) -> bool {
        self.draft.sites.insert(site_id)
    }

    /// Links a contact. Returns whether the reference was new.
    pub fn link_contact(&mut self, contact_id: RecordId) -> bool {
        self.draft.contacts.insert(contact_id)
    }

    /// Returns a copy carrying new timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, timestamps: RecordTimestamps) -> Self {
        self.timestamps = timestamps;
        self
    }
}

/// Persisted kitchen site.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    id: RecordId,
    draft: SiteDraft,
    timestamps: RecordTimestamps,
}

impl Site {
    /// Builds a stored site from its id, values and timestamps.
    #[must_use]
    pub fn new(id: RecordId, draft: SiteDraft, timestamps: RecordTimestamps) -> Self {
        Self {
            id,
            draft,
            timestamps,
        }
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the site name.
    #[must_use]
    pub fn site_name(&self) -> &NonEmptyString {
        &self.draft.site_name
    }

    /// Returns owning groups.
    #[must_use]
    pub fn groups(&self) -> &ReferenceSet {
        &self.draft.groups
    }

    /// Legacy singular group reference.
    #[must_use]
    pub fn group(&self) -> Option<RecordId> {
        self.draft.groups.first()
    }

    /// Returns owning chains.
    #[must_use]
    pub fn chains(&self) -> &ReferenceSet {
        &self.draft.chains
    }

    /// Legacy singular chain reference.
    #[must_use]
    pub fn chain(&self) -> Option<RecordId> {
        self.draft.chains.first()
    }

    /// Returns linked contacts.
    #[must_use]
    pub fn contacts(&self) -> &ReferenceSet {
        &self.draft.contacts
    }

    /// Returns the free-form attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.draft.attributes
    }

    /// Returns creation and save instants.
    #[must_use]
    pub fn timestamps(&self) -> RecordTimestamps {
        self.timestamps
    }

    /// Links a contact. Returns whether the reference was new.
    pub fn link_contact(&mut self, contact_id: RecordId) -> bool {
        self.draft.contacts.insert(contact_id)
    }

    /// Returns a copy carrying new timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, timestamps: RecordTimestamps) -> Self {
        self.timestamps = timestamps;
        self
    }
}

/// Persisted contact person.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    id: RecordId,
    draft: ContactDraft,
    timestamps: RecordTimestamps,
}

impl Contact {
    /// Builds a stored contact from its id, values and timestamps.
    #[must_use]
    pub fn new(id: RecordId, draft: ContactDraft, timestamps: RecordTimestamps) -> Self {
        Self {
            id,
            draft,
            timestamps,
        }
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the given name.
    #[must_use]
    pub fn first_name(&self) -> &NonEmptyString {
        &self.draft.first_name
    }

    /// Returns the family name.
    #[must_use]
    pub fn last_name(&self) -> &NonEmptyString {
        &self.draft.last_name
    }

    /// Returns the email addresses.
    #[must_use]
    pub fn emails(&self) -> &[String] {
        &self.draft.emails
    }

    /// Returns linked groups.
    #[must_use]
    pub fn groups(&self) -> &ReferenceSet {
        &self.draft.groups
    }

    /// Returns linked chains.
    #[must_use]
    pub fn chains(&self) -> &ReferenceSet {
        &self.draft.chains
    }

    /// Returns linked sites.
    #[must_use]
    pub fn sites(&self) -> &ReferenceSet {
        &self.draft.sites
    }

    /// Legacy singular site reference.
    #[must_use]
    pub fn site(&self) -> Option<RecordId> {
        self.draft.sites.first()
    }

    /// Returns the free-form attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.draft.attributes
    }

    /// Returns creation and save instants.
    #[must_use]
    pub fn timestamps(&self) -> RecordTimestamps {
        self.timestamps
    }
}

/// Persisted supplier.
#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    id: RecordId,
    draft: SupplierDraft,
    timestamps: RecordTimestamps,
}

impl Supplier {
    /// Builds a stored supplier from its id, values and timestamps.
    #[must_use]
    pub fn new(id: RecordId, draft: SupplierDraft, timestamps: RecordTimestamps) -> Self {
        Self {
            id,
            draft,
            timestamps,
        }
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the supplier name.
    #[must_use]
    pub fn supplier_name(&self) -> &NonEmptyString {
        &self.draft.supplier_name
    }

    /// Returns the free-form attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.draft.attributes
    }

    /// Returns creation and save instants.
    #[must_use]
    pub fn timestamps(&self) -> RecordTimestamps {
        self.timestamps
    }
}

/// Any one stored client-relationship record.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkedRecord {
    /// A stored group.
    Group(Group),
    /// A stored chain.
    Chain(Chain),
    /// A stored site.
    Site(Site),
    /// A stored contact.
    Contact(Contact),
    /// A stored supplier.
    Supplier(Supplier),
}

impl LinkedRecord {
    /// Returns the kind of the wrapped record.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Group(_) => EntityKind::Group,
            Self::Chain(_) => EntityKind::Chain,
            Self::Site(_) => EntityKind::Site,
            Self::Contact(_) => EntityKind::Contact,
            Self::Supplier(_) => EntityKind::Supplier,
        }
    }

    /// Returns the wrapped record id.
    #[must_use]
    pub fn id(&self) -> RecordId {
        match self {
            Self::Group(group) => group.id(),
            Self::Chain(chain) => chain.id(),
            Self::Site(site) => site.id(),
            Self::Contact(contact) => contact.id(),
            Self::Supplier(supplier) => supplier.id(),
        }
    }
}

/// Normalizes a raw `contactEmails` value into a list.
///
/// A bare string becomes a one-element list, blank strings and `null` become
/// an empty list, and arrays keep their non-blank string entries.
pub fn normalize_contact_emails(raw: Option<&Value>) -> AppResult<Vec<String>> {
    match raw {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(value)) => Ok(non_blank(value).into_iter().collect()),
        Some(Value::Array(values)) => {
            let mut emails = Vec::with_capacity(values.len());
            for value in values {
                match value {
                    Value::String(value) => emails.extend(non_blank(value)),
                    Value::Null => {}
                    other => {
                        return Err(AppError::Validation(format!(
                            "contactEmails entries must be strings, got {other}"
                        )));
                    }
                }
            }
            Ok(emails)
        }
        Some(other) => Err(AppError::Validation(format!(
            "contactEmails must be a string or a list of strings, got {other}"
        ))),
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
