use galley_core::{AppResult, NonEmptyString};
use galley_domain::{
    ChainDraft, ContactDraft, GroupDraft, ReferenceSet, SiteDraft, SupplierDraft,
    normalize_contact_emails,
};

use crate::{ChainInput, ContactInput, GroupInput, NewEntryInput, SiteInput, SupplierInput};

/// Validated drafts for one submission, before any store write.
///
/// A draft is present only when its identity fields are non-blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEntryPlan {
    pub(super) group: Option<GroupDraft>,
    pub(super) chain: Option<ChainDraft>,
    pub(super) site: Option<SiteDraft>,
    pub(super) contact: Option<ContactDraft>,
    pub(super) supplier: Option<SupplierDraft>,
}

impl NewEntryPlan {
    /// Validates a submission into drafts.
    ///
    /// Sub-objects missing their identity fields are skipped without error.
    /// Malformed reference ids or email values on a kept sub-object fail.
    pub fn from_input(input: NewEntryInput) -> AppResult<Self> {
        Ok(Self {
            group: input.group.map(group_draft).transpose()?.flatten(),
            chain: input.chain.map(chain_draft).transpose()?.flatten(),
            site: input.site.map(site_draft).transpose()?.flatten(),
            contact: input.contact.map(contact_draft).transpose()?.flatten(),
            supplier: input.supplier.and_then(supplier_draft),
        })
    }

    /// Returns whether the plan creates nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.group.is_none()
            && self.chain.is_none()
            && self.site.is_none()
            && self.contact.is_none()
            && self.supplier.is_none()
    }

    /// Returns the group draft, if any.
    #[must_use]
    pub fn group(&self) -> Option<&GroupDraft> {
        self.group.as_ref()
    }

    /// Returns the chain draft, if any.
    #[must_use]
    pub fn chain(&self) -> Option<&ChainDraft> {
        self.chain.as_ref()
    }

    /// Returns the site draft, if any.
    #[must_use]
    pub fn site(&self) -> Option<&SiteDraft> {
        self.site.as_ref()
    }

    /// Returns the contact draft, if any.
    #[must_use]
    pub fn contact(&self) -> Option<&ContactDraft> {
        self.contact.as_ref()
    }

    /// Returns the supplier draft, if any.
    #[must_use]
    pub fn supplier(&self) -> Option<&SupplierDraft> {
        self.supplier.as_ref()
    }
}

fn group_draft(input: GroupInput) -> AppResult<Option<GroupDraft>> {
    let Some(group_name) = NonEmptyString::from_optional(input.group_name.as_deref()) else {
        return Ok(None);
    };

    Ok(Some(GroupDraft {
        group_name,
        chains: ReferenceSet::parse_all(&input.chains)?,
        sites: ReferenceSet::parse_all(&input.sites)?,
        contacts: ReferenceSet::parse_all(&input.contacts)?,
        attributes: input.attributes,
    }))
}

fn chain_draft(input: ChainInput) -> AppResult<Option<ChainDraft>> {
    let Some(chain_name) = NonEmptyString::from_optional(input.chain_name.as_deref()) else {
        return Ok(None);
    };

    Ok(Some(ChainDraft {
        chain_name,
        groups: with_legacy(input.group.as_deref(), &input.groups)?,
        sites: ReferenceSet::parse_all(&input.sites)?,
        contacts: ReferenceSet::parse_all(&input.contacts)?,
        attributes: input.attributes,
    }))
}

fn site_draft(input: SiteInput) -> AppResult<Option<SiteDraft>> {
    let Some(site_name) = NonEmptyString::from_optional(input.site_name.as_deref()) else {
        return Ok(None);
    };

    Ok(Some(SiteDraft {
        site_name,
        groups: with_legacy(input.group.as_deref(), &input.groups)?,
        chains: with_legacy(input.chain.as_deref(), &input.chains)?,
        contacts: ReferenceSet::parse_all(&input.contacts)?,
        attributes: input.attributes,
    }))
}

fn contact_draft(input: ContactInput) -> AppResult<Option<ContactDraft>> {
    let first_name = NonEmptyString::from_optional(input.first_name.as_deref());
    let last_name = NonEmptyString::from_optional(input.last_name.as_deref());
    let (Some(first_name), Some(last_name)) = (first_name, last_name) else {
        return Ok(None);
    };

    Ok(Some(ContactDraft {
        first_name,
        last_name,
        emails: normalize_contact_emails(input.emails.as_ref())?,
        groups: ReferenceSet::parse_all(&input.groups)?,
        chains: ReferenceSet::parse_all(&input.chains)?,
        sites: with_legacy(input.site.as_deref(), &input.sites)?,
        attributes: input.attributes,
    }))
}

fn supplier_draft(input: SupplierInput) -> Option<SupplierDraft> {
    NonEmptyString::from_optional(input.supplier_name.as_deref()).map(|supplier_name| {
        SupplierDraft {
            supplier_name,
            attributes: input.attributes,
        }
    })
}

/// Folds a legacy singular reference into the front of its array.
fn with_legacy(legacy: Option<&str>, values: &[String]) -> AppResult<ReferenceSet> {
    let legacy = legacy.filter(|value| !value.trim().is_empty());
    ReferenceSet::parse_all(legacy.into_iter().chain(values.iter().map(String::as_str)))
}
