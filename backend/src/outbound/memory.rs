//! In-process repositories used when no database is configured.
//!
//! Records live in id-ordered maps behind a mutex; ids are assigned from a
//! counter starting at 1 and never reused. Name matching folds case the
//! same way the PostgreSQL adapter's `ILIKE` does for ASCII input.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};

use crate::domain::ports::{
    CompanyPersistenceError, CompanyRepository, CompanyStream, UserPersistenceError,
    UserRepository, UserStream,
};
use crate::domain::{Company, CompanyDraft, CompanyId, User, UserDraft, UserId};

fn name_contains(name: &str, fragment: &str) -> bool {
    name.to_lowercase().contains(&fragment.to_lowercase())
}

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// User repository backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table<User>>, UserPersistenceError> {
        self.table
            .lock()
            .map_err(|_| UserPersistenceError::query("user table lock poisoned"))
    }

    fn email_taken(table: &Table<User>, email: &str, except: Option<UserId>) -> bool {
        table
            .rows
            .values()
            .any(|user| user.email() == email && Some(user.id()) != except)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut table = self.lock()?;
        if Self::email_taken(&table, draft.email(), None) {
            return Err(UserPersistenceError::unique_violation("users_email_key"));
        }
        let id = table.allocate_id();
        let user = User::new(UserId::new(id), draft.clone());
        table.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.get(&id.get()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .lock()?
            .rows
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn find_by_company_id(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self
            .lock()?
            .rows
            .values()
            .filter(|user| user.company_id() == company_id)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut table = self.lock()?;
        if !table.rows.contains_key(&id.get()) {
            return Ok(None);
        }
        if Self::email_taken(&table, draft.email(), Some(id)) {
            return Err(UserPersistenceError::unique_violation("users_email_key"));
        }
        let user = User::new(id, draft.clone());
        table.rows.insert(id.get(), user.clone());
        Ok(Some(user))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        Ok(self.lock()?.rows.remove(&id.get()).is_some())
    }

    fn stream_by_name_containing(&self, fragment: &str) -> UserStream {
        // Snapshot at call time, matching the eager start of the SQL adapter.
        let matches: Result<Vec<User>, UserPersistenceError> = self.lock().map(|table| {
            table
                .rows
                .values()
                .filter(|user| name_contains(user.name(), fragment))
                .cloned()
                .collect()
        });
        match matches {
            Ok(users) => stream::iter(users.into_iter().map(Ok)).boxed(),
            Err(error) => stream::once(async move { Err(error) }).boxed(),
        }
    }
}

/// Company repository backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryCompanyRepository {
    table: Mutex<Table<Company>>,
}

impl InMemoryCompanyRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table<Company>>, CompanyPersistenceError> {
        self.table
            .lock()
            .map_err(|_| CompanyPersistenceError::query("company table lock poisoned"))
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn insert(&self, draft: &CompanyDraft) -> Result<Company, CompanyPersistenceError> {
        let mut table = self.lock()?;
        let id = table.allocate_id();
        let company = Company::new(CompanyId::new(id), draft.clone());
        table.rows.insert(id, company.clone());
        Ok(company)
    }

    async fn find_all(&self) -> Result<Vec<Company>, CompanyPersistenceError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, CompanyPersistenceError> {
        Ok(self.lock()?.rows.get(&id.get()).cloned())
    }

    async fn update(
        &self,
        id: CompanyId,
        draft: &CompanyDraft,
    ) -> Result<Option<Company>, CompanyPersistenceError> {
        let mut table = self.lock()?;
        let Some(slot) = table.rows.get_mut(&id.get()) else {
            return Ok(None);
        };
        *slot = Company::new(id, draft.clone());
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: CompanyId) -> Result<bool, CompanyPersistenceError> {
        Ok(self.lock()?.rows.remove(&id.get()).is_some())
    }

    fn stream_by_name_containing(&self, fragment: &str) -> CompanyStream {
        let matches: Result<Vec<Company>, CompanyPersistenceError> = self.lock().map(|table| {
            table
                .rows
                .values()
                .filter(|company| name_contains(company.name(), fragment))
                .cloned()
                .collect()
        });
        match matches {
            Ok(companies) => stream::iter(companies.into_iter().map(Ok)).boxed(),
            Err(error) => stream::once(async move { Err(error) }).boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use futures_util::TryStreamExt;
    use rstest::{fixture, rstest};

    use super::*;

    fn user_draft(name: &str, email: &str, company: i64) -> UserDraft {
        UserDraft::new(name, email, 30, CompanyId::new(company))
    }

    #[fixture]
    fn users() -> InMemoryUserRepository {
        InMemoryUserRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_assigned_sequentially_and_never_reused(users: InMemoryUserRepository) {
        let first = users
            .insert(&user_draft("Ann", "ann@example.com", 1))
            .await
            .expect("insert");
        assert!(users.delete(first.id()).await.expect("delete"));
        let second = users
            .insert(&user_draft("Bob", "bob@example.com", 1))
            .await
            .expect("insert");

        assert_eq!(first.id(), UserId::new(1));
        assert_eq!(second.id(), UserId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_emails_are_unique_violations(users: InMemoryUserRepository) {
        users
            .insert(&user_draft("Ann", "ann@example.com", 1))
            .await
            .expect("insert");

        let error = users
            .insert(&user_draft("Annie", "ann@example.com", 2))
            .await
            .expect_err("duplicate email");

        assert!(matches!(error, UserPersistenceError::UniqueViolation { .. }));
        assert_eq!(users.find_all().await.expect("list").len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_missing_row_does_not_insert(users: InMemoryUserRepository) {
        let updated = users
            .update(UserId::new(8), &user_draft("Ann", "ann@example.com", 1))
            .await
            .expect("update");

        assert!(updated.is_none());
        assert!(users.find_all().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn name_search_ignores_case(users: InMemoryUserRepository) {
        for (name, email) in [("Ann", "a@x.io"), ("HANNAH", "h@x.io"), ("Bob", "b@x.io")] {
            users
                .insert(&user_draft(name, email, 1))
                .await
                .expect("insert");
        }

        let names: Vec<String> = users
            .stream_by_name_containing("an")
            .map_ok(|user| user.name().to_owned())
            .try_collect()
            .await
            .expect("stream");

        assert_eq!(names, vec!["Ann".to_owned(), "HANNAH".to_owned()]);
    }

    #[rstest]
    #[tokio::test]
    async fn users_are_filtered_by_company(users: InMemoryUserRepository) {
        users
            .insert(&user_draft("Ann", "ann@example.com", 1))
            .await
            .expect("insert");
        users
            .insert(&user_draft("Bob", "bob@example.com", 2))
            .await
            .expect("insert");

        let members = users
            .find_by_company_id(CompanyId::new(2))
            .await
            .expect("filter");

        assert_eq!(members.len(), 1);
        assert_eq!(members.first().map(User::name), Some("Bob"));
    }

    #[rstest]
    #[tokio::test]
    async fn company_updates_keep_the_id() {
        let companies = InMemoryCompanyRepository::new();
        let created = companies
            .insert(&CompanyDraft::new("Acme", ""))
            .await
            .expect("insert");

        let updated = companies
            .update(
                created.id(),
                &CompanyDraft::new("Anderson Inc", "1 Main St"),
            )
            .await
            .expect("update")
            .expect("row exists");

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name(), "Anderson Inc");
    }
}
