//! Driven port for company persistence.

use async_trait::async_trait;
use futures_util::stream::BoxStream;

use crate::domain::{Company, CompanyDraft, CompanyId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by company repository adapters.
    pub enum CompanyPersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "company store connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "company store query failed: {message}",
        /// A uniqueness constraint rejected the write.
        UniqueViolation { message: String } => "company store rejected duplicate: {message}",
    }
}

/// Lazy sequence of companies produced by a streaming query.
pub type CompanyStream = BoxStream<'static, Result<Company, CompanyPersistenceError>>;

/// Port for company storage and retrieval.
///
/// Mirrors [`super::UserRepository`] without the email and company lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Persist a new company and return it with its assigned id.
    async fn insert(&self, draft: &CompanyDraft) -> Result<Company, CompanyPersistenceError>;

    /// Every stored company, ordered by id.
    async fn find_all(&self) -> Result<Vec<Company>, CompanyPersistenceError>;

    /// Look up a company by id.
    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, CompanyPersistenceError>;

    /// Replace every field of an existing company; `None` when it is gone.
    async fn update(
        &self,
        id: CompanyId,
        draft: &CompanyDraft,
    ) -> Result<Option<Company>, CompanyPersistenceError>;

    /// Delete a company, returning whether a row was removed.
    async fn delete(&self, id: CompanyId) -> Result<bool, CompanyPersistenceError>;

    /// Stream companies whose name contains `fragment`, ignoring case.
    fn stream_by_name_containing(&self, fragment: &str) -> CompanyStream;
}
