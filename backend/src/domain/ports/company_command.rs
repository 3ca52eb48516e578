//! Driving port for company mutations.

use async_trait::async_trait;

use crate::domain::{Company, CompanyDraft, CompanyId, Error};

/// Use-case port called by inbound adapters to create, replace, and delete
/// companies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyCommand: Send + Sync {
    /// Create a company. Names are not deduplicated.
    async fn create(&self, draft: CompanyDraft) -> Result<Company, Error>;

    /// Replace every field of company `id`, keeping the id.
    async fn update(&self, id: CompanyId, draft: CompanyDraft) -> Result<Company, Error>;

    /// Delete company `id`. Users pointing at it are left untouched.
    async fn delete(&self, id: CompanyId) -> Result<(), Error>;
}
