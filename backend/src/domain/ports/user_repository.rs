//! Driven port for user persistence.
//!
//! Adapters store users in a single collection keyed by a store-assigned
//! id. Emails are unique: adapters report a duplicate as
//! [`UserPersistenceError::UniqueViolation`] rather than overwriting.

use async_trait::async_trait;
use futures_util::stream::BoxStream;

use crate::domain::{CompanyId, User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "user store connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "user store query failed: {message}",
        /// A uniqueness constraint rejected the write.
        UniqueViolation { message: String } => "user store rejected duplicate: {message}",
    }
}

/// Lazy sequence of users produced by a streaming query.
pub type UserStream = BoxStream<'static, Result<User, UserPersistenceError>>;

/// Port for user storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its assigned id.
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Every stored user, ordered by id.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Look up a user by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Users whose `company_id` matches, ordered by id.
    async fn find_by_company_id(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<User>, UserPersistenceError>;

    /// Replace every field of an existing user.
    ///
    /// Returns `None` when no row with `id` exists at write time; the
    /// adapter never inserts.
    async fn update(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Delete a user, returning whether a row was removed.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;

    /// Stream users whose name contains `fragment`, ignoring case.
    ///
    /// The query starts when this method is called, not when the stream is
    /// first polled. Dropping the stream cancels it.
    fn stream_by_name_containing(&self, fragment: &str) -> UserStream;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UserPersistenceError::connection("refused"), "user store connection failed: refused")]
    #[case(UserPersistenceError::query("syntax"), "user store query failed: syntax")]
    #[case(
        UserPersistenceError::unique_violation("users_email_key"),
        "user store rejected duplicate: users_email_key"
    )]
    fn errors_format_their_context(#[case] error: UserPersistenceError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
