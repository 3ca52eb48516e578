//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Use-case port called by inbound adapters to create, replace, and delete
/// users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Create a user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::Conflict`] when the email is
    /// already taken.
    async fn create(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace every field of user `id`, keeping the id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] when `id` is unknown.
    async fn update(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Delete user `id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] when `id` is unknown.
    async fn delete(&self, id: UserId) -> Result<(), Error>;
}
