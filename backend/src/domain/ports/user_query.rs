//! Driving port for user reads.

use async_trait::async_trait;
use futures_util::stream::BoxStream;

use crate::domain::{CompanyId, Error, User, UserId};

/// Use-case port for fetching users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// All users in store order.
    async fn list(&self) -> Result<Vec<User>, Error>;

    /// Fetch one user; `not_found` when absent.
    async fn find(&self, id: UserId) -> Result<User, Error>;

    /// Users belonging to `company_id`.
    async fn list_by_company(&self, company_id: CompanyId) -> Result<Vec<User>, Error>;

    /// Stream users whose name contains `fragment`.
    fn find_by_name_containing(&self, fragment: &str) -> BoxStream<'static, Result<User, Error>>;
}
