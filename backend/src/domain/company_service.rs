//! Company domain service.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream::{BoxStream, StreamExt};
use tracing::info;

use crate::domain::ports::{
    CompanyCommand, CompanyPersistenceError, CompanyQuery, CompanyRepository,
};
use crate::domain::{Company, CompanyDraft, CompanyId, Error};

const COMPANY_NOT_FOUND_MESSAGE: &str = "Company not found";

fn map_company_persistence_error(error: CompanyPersistenceError) -> Error {
    match error {
        CompanyPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("company store unavailable: {message}"))
        }
        CompanyPersistenceError::Query { message } => {
            Error::internal(format!("company store error: {message}"))
        }
        CompanyPersistenceError::UniqueViolation { .. } => {
            Error::conflict("Company already exists")
        }
    }
}

/// Company service implementing [`CompanyCommand`] and [`CompanyQuery`].
///
/// Unlike users, companies carry no uniqueness rule of their own: only a
/// constraint enforced by the store can produce a conflict.
#[derive(Clone)]
pub struct CompanyService<R> {
    repo: Arc<R>,
}

impl<R> CompanyService<R> {
    /// Create a new service backed by `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> CompanyService<R>
where
    R: CompanyRepository,
{
    async fn ensure_exists(&self, id: CompanyId) -> Result<(), Error> {
        match self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_company_persistence_error)?
        {
            Some(_) => Ok(()),
            None => Err(Error::not_found(COMPANY_NOT_FOUND_MESSAGE)),
        }
    }
}

#[async_trait]
impl<R> CompanyCommand for CompanyService<R>
where
    R: CompanyRepository,
{
    async fn create(&self, draft: CompanyDraft) -> Result<Company, Error> {
        let company = self
            .repo
            .insert(&draft)
            .await
            .map_err(map_company_persistence_error)?;
        info!(company_id = %company.id(), "company created");
        Ok(company)
    }

    async fn update(&self, id: CompanyId, draft: CompanyDraft) -> Result<Company, Error> {
        self.ensure_exists(id).await?;
        self.repo
            .update(id, &draft)
            .await
            .map_err(map_company_persistence_error)?
            .ok_or_else(|| Error::not_found(COMPANY_NOT_FOUND_MESSAGE))
    }

    async fn delete(&self, id: CompanyId) -> Result<(), Error> {
        self.ensure_exists(id).await?;
        if self
            .repo
            .delete(id)
            .await
            .map_err(map_company_persistence_error)?
        {
            info!(company_id = %id, "company deleted");
            Ok(())
        } else {
            Err(Error::not_found(COMPANY_NOT_FOUND_MESSAGE))
        }
    }
}

#[async_trait]
impl<R> CompanyQuery for CompanyService<R>
where
    R: CompanyRepository,
{
    async fn list(&self) -> Result<Vec<Company>, Error> {
        self.repo
            .find_all()
            .await
            .map_err(map_company_persistence_error)
    }

    async fn find(&self, id: CompanyId) -> Result<Company, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_company_persistence_error)?
            .ok_or_else(|| Error::not_found(COMPANY_NOT_FOUND_MESSAGE))
    }

    fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> BoxStream<'static, Result<Company, Error>> {
        self.repo
            .stream_by_name_containing(fragment)
            .map(|row| row.map_err(map_company_persistence_error))
            .boxed()
    }
}
