use galley_core::{AppError, AppResult};
use galley_domain::{Chain, Contact, Group, RecordId, Site};

use super::{NewEntryOutcome, NewEntryPlan, NewEntryService};
use crate::NewEntryInput;

/// Children created in this submission that a parent must reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct ChildLinks {
    pub(super) chain: Option<RecordId>,
    pub(super) site: Option<RecordId>,
    pub(super) contact: Option<RecordId>,
}

impl NewEntryService {
    /// Validates and commits one submission.
    pub async fn create_entry(&self, input: NewEntryInput) -> AppResult<NewEntryOutcome> {
        let plan = NewEntryPlan::from_input(input)?;
        self.commit(plan).await
    }

    /// Creates every planned record parent-first, then back-patches parents.
    pub async fn commit(&self, plan: NewEntryPlan) -> AppResult<NewEntryOutcome> {
        let NewEntryPlan {
            group,
            chain,
            site,
            contact,
            supplier,
        } = plan;

        let group = match group {
            Some(draft) => Some(self.repository.create_group(draft).await?),
            None => None,
        };
        let group_id = group.as_ref().map(Group::id);

        let chain = match chain {
            Some(mut draft) => {
                if let Some(group_id) = group_id {
                    draft.groups.insert(group_id);
                }
                Some(self.repository.create_chain(draft).await?)
            }
            None => None,
        };
        let chain_id = chain.as_ref().map(Chain::id);

        let site = match site {
            Some(mut draft) => {
                if let Some(group_id) = group_id {
                    draft.groups.insert(group_id);
                }
                if let Some(chain_id) = chain_id {
                    draft.chains.insert(chain_id);
                }
                Some(self.repository.create_site(draft).await?)
            }
            None => None,
        };
        let site_id = site.as_ref().map(Site::id);

        let contact = match contact {
            Some(mut draft) => {
                if let Some(group_id) = group_id {
                    draft.groups.insert(group_id);
                }
                if let Some(chain_id) = chain_id {
                    draft.chains.insert(chain_id);
                }
                if let Some(site_id) = site_id {
                    draft.sites.insert(site_id);
                }
                Some(self.repository.create_contact(draft).await?)
            }
            None => None,
        };
        let contact_id = contact.as_ref().map(Contact::id);

        let supplier = match supplier {
            Some(draft) => Some(self.repository.create_supplier(draft).await?),
            None => None,
        };

        let mut outcome = NewEntryOutcome {
            group,
            chain,
            site,
            contact,
            supplier,
        };

        if let Some(group_id) = group_id {
            let links = ChildLinks {
                chain: chain_id,
                site: site_id,
                contact: contact_id,
            };
            if let Some(saved) = self.back_patch_group(group_id, links).await? {
                outcome.group = Some(saved);
            }
        }

        if let Some(chain_id) = chain_id {
            let links = ChildLinks {
                chain: None,
                site: site_id,
                contact: contact_id,
            };
            if let Some(saved) = self.back_patch_chain(chain_id, links).await? {
                outcome.chain = Some(saved);
            }
        }

        if let Some(site_id) = site_id {
            let links = ChildLinks {
                chain: None,
                site: None,
                contact: contact_id,
            };
            if let Some(saved) = self.back_patch_site(site_id, links).await? {
                outcome.site = Some(saved);
            }
        }

        Ok(outcome)
    }

    /// Re-reads a group and saves it when new child references were added.
    ///
    /// Returns `None` when the group already referenced every child.
    pub(super) async fn back_patch_group(
        &self,
        group_id: RecordId,
        links: ChildLinks,
    ) -> AppResult<Option<Group>> {
        let mut group = self
            .repository
            .find_group(group_id)
            .await?
            .ok_or_else(|| missing_parent("group", group_id))?;

        let mut changed = false;
        if let Some(chain_id) = links.chain {
            changed |= group.link_chain(chain_id);
        }
        if let Some(site_id) = links.site {
            changed |= group.link_site(site_id);
        }
        if let Some(contact_id) = links.contact {
            changed |= group.link_contact(contact_id);
        }

        if !changed {
            return Ok(None);
        }

        self.repository.save_group(group).await.map(Some)
    }

    /// Re-reads a chain and saves it when new child references were added.
    pub(super) async fn back_patch_chain(
        &self,
        chain_id: RecordId,
        links: ChildLinks,
    ) -> AppResult<Option<Chain>> {
        let mut chain = self
            .repository
            .find_chain(chain_id)
            .await?
            .ok_or_else(|| missing_parent("chain", chain_id))?;

        let mut changed = false;
        if let Some(site_id) = links.site {
            changed |= chain.link_site(site_id);
        }
        if let Some(contact_id) = links.contact {
            changed |= chain.link_contact(contact_id);
        }

        if !changed {
            return Ok(None);
        }

        self.repository.save_chain(chain).await.map(Some)
    }

    /// Re-reads a site and saves it when the contact reference was added.
    pub(super) async fn back_patch_site(
        &self,
        site_id: RecordId,
        links: ChildLinks,
    ) -> AppResult<Option<Site>> {
        let mut site = self
            .repository
            .find_site(site_id)
            .await?
            .ok_or_else(|| missing_parent("site", site_id))?;

        let changed = links
            .contact
            .is_some_and(|contact_id| site.link_contact(contact_id));

        if !changed {
            return Ok(None);
        }

        self.repository.save_site(site).await.map(Some)
    }
}

fn missing_parent(kind: &str, id: RecordId) -> AppError {
    AppError::NotFound(format!(
        "{kind} '{id}' disappeared before its references could be updated"
    ))
}
