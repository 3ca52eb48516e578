//! PostgreSQL-backed [`CompanyRepository`] implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use futures_util::TryStreamExt;

use crate::domain::ports::{CompanyPersistenceError, CompanyRepository, CompanyStream};
use crate::domain::{Company, CompanyDraft, CompanyId};

use super::contains_pattern;
use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CompanyRow, CompanyValues};
use super::pool::DbPool;
use super::row_stream::spawn_row_stream;
use super::schema::companies;

/// Diesel-backed company repository over `application.companies`.
#[derive(Clone)]
pub struct DieselCompanyRepository {
    pool: DbPool,
}

impl DieselCompanyRepository {
    /// Create a repository using `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for DieselCompanyRepository {
    async fn insert(&self, draft: &CompanyDraft) -> Result<Company, CompanyPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: CompanyRow = diesel::insert_into(companies::table)
            .values(CompanyValues::from(draft))
            .returning(CompanyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Company>, CompanyPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CompanyRow> = companies::table
            .order(companies::id.asc())
            .select(CompanyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, CompanyPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        companies::table
            .find(id.get())
            .select(CompanyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row: Option<CompanyRow>| row.map(Company::from))
            .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        id: CompanyId,
        draft: &CompanyDraft,
    ) -> Result<Option<Company>, CompanyPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(companies::table.find(id.get()))
            .set(CompanyValues::from(draft))
            .returning(CompanyRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map(|row: Option<CompanyRow>| row.map(Company::from))
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: CompanyId) -> Result<bool, CompanyPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(companies::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }

    fn stream_by_name_containing(&self, fragment: &str) -> CompanyStream {
        let pool = self.pool.clone();
        let pattern = contains_pattern(fragment);
        spawn_row_stream(move |tx| async move {
            let mut conn = pool.get().await.map_err(map_pool_error)?;
            let rows = companies::table
                .filter(companies::name.ilike(pattern))
                .order(companies::id.asc())
                .select(CompanyRow::as_select())
                .load_stream::<CompanyRow>(&mut conn)
                .await
                .map_err(map_diesel_error)?;
            let mut rows = std::pin::pin!(rows);
            while let Some(row) = rows.try_next().await.map_err(map_diesel_error)? {
                if tx.send(Ok(Company::from(row))).await.is_err() {
                    break;
                }
            }
            Ok(())
        })
    }
}
