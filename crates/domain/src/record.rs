use std::str::FromStr;

use chrono::{DateTime, Utc};
use galley_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned identifier of a client-relationship record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Creates a new random record identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a record identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Parses a record identifier from its textual form.
    pub fn parse(value: &str) -> AppResult<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|error| AppError::Validation(format!("invalid record id '{value}': {error}")))
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

/// Kinds of client-relationship records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Top-level client group.
    Group,
    /// Restaurant or retail chain inside a group.
    Chain,
    /// Physical kitchen site.
    Site,
    /// Person attached to groups, chains or sites.
    Contact,
    /// Equipment supplier, never cross-linked.
    Supplier,
}

impl EntityKind {
    /// Returns the stable storage value for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Chain => "chain",
            Self::Site => "site",
            Self::Contact => "contact",
            Self::Supplier => "supplier",
        }
    }

    /// Parses a kind from a storage or route value.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "group" | "groups" => Ok(Self::Group),
            "chain" | "chains" => Ok(Self::Chain),
            "site" | "sites" => Ok(Self::Site),
            "contact" | "contacts" => Ok(Self::Contact),
            "supplier" | "suppliers" => Ok(Self::Supplier),
            other => Err(AppError::Validation(format!("unknown entity kind '{other}'"))),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Ordered, duplicate-free list of record references.
///
/// Insertion order is preserved so the first element can stand in for the
/// legacy singular reference field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RecordId>", into = "Vec<RecordId>")]
pub struct ReferenceSet(Vec<RecordId>);

impl ReferenceSet {
    /// Creates an empty reference set.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses textual ids, dropping duplicates and keeping first occurrence order.
    pub fn parse_all<I, S>(values: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut references = Self::new();
        for value in values {
            references.insert(RecordId::parse(value.as_ref())?);
        }

        Ok(references)
    }

    /// Appends an id unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, id: RecordId) -> bool {
        if self.0.contains(&id) {
            return false;
        }

        self.0.push(id);
        true
    }

    /// Returns whether the id is referenced.
    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.0.contains(id)
    }

    /// Returns the first reference, used for legacy singular fields.
    #[must_use]
    pub fn first(&self) -> Option<RecordId> {
        self.0.first().copied()
    }

    /// Returns the references in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[RecordId] {
        &self.0
    }

    /// Returns the number of references.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no references are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the references as raw UUID values for storage.
    #[must_use]
    pub fn to_uuids(&self) -> Vec<Uuid> {
        self.0.iter().map(RecordId::as_uuid).collect()
    }
}

impl From<Vec<RecordId>> for ReferenceSet {
    fn from(values: Vec<RecordId>) -> Self {
        values.into_iter().collect()
    }
}

impl From<ReferenceSet> for Vec<RecordId> {
    fn from(value: ReferenceSet) -> Self {
        value.0
    }
}

impl FromIterator<RecordId> for ReferenceSet {
    fn from_iter<T: IntoIterator<Item = RecordId>>(iter: T) -> Self {
        let mut references = Self::new();
        for id in iter {
            references.insert(id);
        }
        references
    }
}

/// Creation and last-save instants of a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordTimestamps {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RecordTimestamps {
    /// Stamps a record created at `now`.
    #[must_use]
    pub fn created(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Restores timestamps read back from storage.
    #[must_use]
    pub fn restore(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at,
        }
    }

    /// Returns a copy marked as saved at `now`.
    #[must_use]
    pub fn touched(self, now: DateTime<Utc>) -> Self {
        Self {
            created_at: self.created_at,
            updated_at: now,
        }
    }

    /// Returns the creation instant.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last save instant.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use uuid::Uuid;

    use super::{EntityKind, RecordId, ReferenceSet};

    #[test]
    fn record_id_rejects_malformed_values() {
        assert!(RecordId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn entity_kind_accepts_plural_route_segments() {
        assert_eq!(EntityKind::parse("Sites").ok(), Some(EntityKind::Site));
        assert!(EntityKind::parse("quote").is_err());
    }

    #[test]
    fn parse_all_collapses_duplicate_ids() {
        let id = Uuid::new_v4().to_string();
        let references = ReferenceSet::parse_all([id.as_str(), id.as_str()])
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(references.len(), 1);
    }

    proptest! {
        #[test]
        fn repeated_inserts_never_duplicate(picks in proptest::collection::vec(0usize..6, 0..40)) {
            let pool: Vec<RecordId> = (0..6).map(|_| RecordId::new()).collect();
            let mut references = ReferenceSet::new();
            for pick in &picks {
                references.insert(pool[*pick]);
            }
            for pick in &picks {
                prop_assert!(!references.insert(pool[*pick]));
            }

            let mut seen = std::collections::HashSet::new();
            prop_assert!(references.as_slice().iter().all(|id| seen.insert(*id)));
            if let Some(first_pick) = picks.first() {
                prop_assert_eq!(references.first(), Some(pool[*first_pick]));
            }
        }
    }
}
