//! Driving port for the cross-entity name search.

use crate::domain::HitStream;

/// Search users and companies by name in one call.
#[cfg_attr(test, mockall::automock)]
pub trait DirectorySearch: Send + Sync {
    /// Start both underlying queries and return their merged hits.
    fn search(&self, query: &str) -> HitStream;
}
