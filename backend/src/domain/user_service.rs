//! User domain service.
//!
//! Implements the user driving ports on top of a [`UserRepository`]. Email
//! uniqueness and id existence are checked here before the store is asked
//! to write.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream::{BoxStream, StreamExt};
use tracing::{debug, info};

use crate::domain::ports::{UserCommand, UserPersistenceError, UserQuery, UserRepository};
use crate::domain::{CompanyId, Error, User, UserDraft, UserId};

const USER_EXISTS_MESSAGE: &str = "User already exists";
const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Map a user persistence failure onto the shared domain error.
fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
        UserPersistenceError::UniqueViolation { .. } => Error::conflict(USER_EXISTS_MESSAGE),
    }
}

/// User service implementing [`UserCommand`] and [`UserQuery`].
#[derive(Clone)]
pub struct UserService<R> {
    repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service backed by `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    async fn ensure_exists(&self, id: UserId) -> Result<(), Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_user_persistence_error)?
            .map(|_| ())
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
    }
}

#[async_trait]
impl<R> UserCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create(&self, draft: UserDraft) -> Result<User, Error> {
        let existing = self
            .repo
            .find_by_email(draft.email())
            .await
            .map_err(map_user_persistence_error)?;
        if existing.is_some() {
            debug!("rejecting user with duplicate email");
            return Err(Error::conflict(USER_EXISTS_MESSAGE));
        }

        let user = self
            .repo
            .insert(&draft)
            .await
            .map_err(map_user_persistence_error)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        self.ensure_exists(id).await?;
        let user = self
            .repo
            .update(id, &draft)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))?;
        info!(user_id = %id, "user updated");
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), Error> {
        self.ensure_exists(id).await?;
        let removed = self
            .repo
            .delete(id)
            .await
            .map_err(map_user_persistence_error)?;
        if !removed {
            return Err(Error::not_found(USER_NOT_FOUND_MESSAGE));
        }
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> UserQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list(&self) -> Result<Vec<User>, Error> {
        self.repo
            .find_all()
            .await
            .map_err(map_user_persistence_error)
    }

    async fn find(&self, id: UserId) -> Result<User, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
    }

    async fn list_by_company(&self, company_id: CompanyId) -> Result<Vec<User>, Error> {
        self.repo
            .find_by_company_id(company_id)
            .await
            .map_err(map_user_persistence_error)
    }

    fn find_by_name_containing(&self, fragment: &str) -> BoxStream<'static, Result<User, Error>> {
        self.repo
            .stream_by_name_containing(fragment)
            .map(|row| row.map_err(map_user_persistence_error))
            .boxed()
    }
}
