//! Driving port for company reads.

use async_trait::async_trait;
use futures_util::stream::BoxStream;

use crate::domain::{Company, CompanyId, Error};

/// Use-case port for fetching companies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyQuery: Send + Sync {
    /// All companies in store order.
    async fn list(&self) -> Result<Vec<Company>, Error>;

    /// Fetch one company; `not_found` when absent.
    async fn find(&self, id: CompanyId) -> Result<Company, Error>;

    /// Stream companies whose name contains `fragment`.
    fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> BoxStream<'static, Result<Company, Error>>;
}
