//! Company data model.
//!
//! A company conceptually owns the users whose `company_id` points at it.
//! The relation is never loaded eagerly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned company identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(i64);

impl CompanyId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Company fields supplied by clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDraft {
    name: String,
    address: String,
}

impl CompanyDraft {
    /// Construct a draft. Either field may be empty.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Company name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Postal address.
    #[must_use]
    pub fn address(&self) -> &str {
        self.address.as_str()
    }
}

/// Persisted company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    id: CompanyId,
    draft: CompanyDraft,
}

impl Company {
    /// Pair a store-assigned id with client-supplied fields.
    #[must_use]
    pub fn new(id: CompanyId, draft: CompanyDraft) -> Self {
        Self { id, draft }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> CompanyId {
        self.id
    }

    /// Company name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.draft.name()
    }

    /// Postal address.
    #[must_use]
    pub fn address(&self) -> &str {
        self.draft.address()
    }

    /// Client-supplied fields.
    #[must_use]
    pub fn draft(&self) -> &CompanyDraft {
        &self.draft
    }
}
