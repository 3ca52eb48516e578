//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::company::CompanyId;

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
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

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User fields that are supplied by clients: everything except the id.
///
/// Any name, email, or age is accepted. The only rule on users is email
/// uniqueness, which the service and the store enforce.
///
/// # Examples
/// ```
/// use directory::domain::{CompanyId, UserDraft};
///
/// let draft = UserDraft::new("Ann", "ann@example.com", 31, CompanyId::new(2));
/// assert_eq!(draft.email(), "ann@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: String,
    age: i32,
    company_id: CompanyId,
}

impl UserDraft {
    /// Construct a draft from client-supplied fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
        company_id: CompanyId,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
            company_id,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address, unique across users.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Age in years.
    #[must_use]
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Company the user belongs to. Not checked against existing companies.
    #[must_use]
    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }
}

/// Persisted user: a draft plus the identifier assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    draft: UserDraft,
}

impl User {
    /// Pair a store-assigned id with client-supplied fields.
    #[must_use]
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        Self { id, draft }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.draft.name()
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.draft.email()
    }

    /// Age in years.
    #[must_use]
    pub fn age(&self) -> i32 {
        self.draft.age()
    }

    /// Owning company.
    #[must_use]
    pub fn company_id(&self) -> CompanyId {
        self.draft.company_id()
    }

    /// Client-supplied fields.
    #[must_use]
    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }
}
