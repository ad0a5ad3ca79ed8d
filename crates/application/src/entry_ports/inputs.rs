use galley_domain::Attributes;
use serde_json::Value;

/// Raw group values from a new-entry submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupInput {
    /// Identity field. Blank or absent skips the group.
    pub group_name: Option<String>,
    /// Already existing chain ids.
    pub chains: Vec<String>,
    /// Already existing site ids.
    pub sites: Vec<String>,
    /// Already existing contact ids.
    pub contacts: Vec<String>,
    /// Remaining entity-specific fields.
    pub attributes: Attributes,
}

/// Raw chain values from a new-entry submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainInput {
    /// Identity field. Blank or absent skips the chain.
    pub chain_name: Option<String>,
    /// Legacy singular group id.
    pub group: Option<String>,
    /// Already existing group ids.
    pub groups: Vec<String>,
    /// Already existing site ids.
    pub sites: Vec<String>,
    /// Already existing contact ids.
    pub contacts: Vec<String>,
    /// Remaining entity-specific fields.
    pub attributes: Attributes,
}

/// Raw site values from a new-entry submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteInput {
    /// Identity field. Blank or absent skips the site.
    pub site_name: Option<String>,
    /// Legacy singular group id.
    pub group: Option<String>,
    /// Already existing group ids.
    pub groups: Vec<String>,
    /// Legacy singular chain id.
    pub chain: Option<String>,
    /// Already existing chain ids.
    pub chains: Vec<String>,
    /// Already existing contact ids.
    pub contacts: Vec<String>,
    /// Remaining entity-specific fields.
    pub attributes: Attributes,
}

/// Raw contact values from a new-entry submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInput {
    /// First identity field.
    pub first_name: Option<String>,
    /// Second identity field. Both names are needed to create a contact.
    pub last_name: Option<String>,
    /// Email value as submitted: a string, a list, or nothing.
    pub emails: Option<Value>,
    /// Legacy singular site id.
    pub site: Option<String>,
    /// Already existing group ids.
    pub groups: Vec<String>,
    /// Already existing chain ids.
    pub chains: Vec<String>,
    /// Already existing site ids.
    pub sites: Vec<String>,
    /// Remaining entity-specific fields.
    pub attributes: Attributes,
}

/// Raw supplier values from a new-entry submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierInput {
    /// Identity field. Blank or absent skips the supplier.
    pub supplier_name: Option<String>,
    /// Remaining entity-specific fields.
    pub attributes: Attributes,
}

/// One new-entry submission with up to five optional records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEntryInput {
    /// Optional group.
    pub group: Option<GroupInput>,
    /// Optional chain.
    pub chain: Option<ChainInput>,
    /// Optional site.
    pub site: Option<SiteInput>,
    /// Optional contact.
    pub contact: Option<ContactInput>,
    /// Optional supplier.
    pub supplier: Option<SupplierInput>,
}
