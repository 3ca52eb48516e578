//! Search service combining the user and company name queries.

use std::sync::Arc;

use futures_util::stream::{StreamExt, TryStreamExt};
use tracing::debug;

use crate::domain::ports::{CompanyQuery, DirectorySearch, UserQuery};
use crate::domain::{HitStream, SearchHit, merge_hits};

/// Implements [`DirectorySearch`] over the two entity query ports.
#[derive(Clone)]
pub struct SearchService {
    users: Arc<dyn UserQuery>,
    companies: Arc<dyn CompanyQuery>,
}

impl SearchService {
    /// Create a search service over both query ports.
    pub fn new(users: Arc<dyn UserQuery>, companies: Arc<dyn CompanyQuery>) -> Self {
        Self { users, companies }
    }
}

impl DirectorySearch for SearchService {
    fn search(&self, query: &str) -> HitStream {
        debug!(query, "starting directory search");
        // Both queries are issued here, before the caller polls anything.
        let users = self
            .users
            .find_by_name_containing(query)
            .map_ok(SearchHit::from)
            .boxed();
        let companies = self
            .companies
            .find_by_name_containing(query)
            .map_ok(SearchHit::from)
            .boxed();
        merge_hits(users, companies)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures_util::stream;
    use mockall::predicate::eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::{MockCompanyQuery, MockUserQuery};
    use crate::domain::{
        Company, CompanyDraft, CompanyId, Error, ErrorCode, HitKind, User, UserDraft, UserId,
    };

    fn ann() -> User {
        User::new(
            UserId::new(1),
            UserDraft::new("Ann", "ann@example.com", 30, CompanyId::new(2)),
        )
    }

    fn anderson() -> Company {
        Company::new(
            CompanyId::new(2),
            CompanyDraft::new("Anderson Inc", "1 Main St"),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn search_yields_users_and_companies() {
        let mut users = MockUserQuery::new();
        users
            .expect_find_by_name_containing()
            .with(eq("an"))
            .times(1)
            .return_once(|_| stream::iter(vec![Ok(ann())]).boxed());
        let mut companies = MockCompanyQuery::new();
        companies
            .expect_find_by_name_containing()
            .with(eq("an"))
            .times(1)
            .return_once(|_| stream::iter(vec![Ok(anderson())]).boxed());

        let service = SearchService::new(Arc::new(users), Arc::new(companies));
        let mut hits: Vec<SearchHit> = service
            .search("an")
            .try_collect()
            .await
            .expect("search succeeds");
        hits.sort_by_key(SearchHit::id);

        assert_eq!(
            hits,
            vec![
                SearchHit::new(1, "Ann", HitKind::User),
                SearchHit::new(2, "Anderson Inc", HitKind::Company),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn search_starts_both_queries_before_polling() {
        let mut users = MockUserQuery::new();
        users
            .expect_find_by_name_containing()
            .times(1)
            .return_once(|_| stream::empty().boxed());
        let mut companies = MockCompanyQuery::new();
        companies
            .expect_find_by_name_containing()
            .times(1)
            .return_once(|_| stream::empty().boxed());

        let service = SearchService::new(Arc::new(users), Arc::new(companies));
        // Dropped unpolled: the mocks still verify both calls happened.
        drop(service.search("zz"));
    }

    #[rstest]
    #[tokio::test]
    async fn search_fails_fast_on_a_source_error() {
        let mut users = MockUserQuery::new();
        users.expect_find_by_name_containing().return_once(|_| {
            stream::iter(vec![Err(Error::service_unavailable("user store unavailable"))]).boxed()
        });
        let mut companies = MockCompanyQuery::new();
        companies
            .expect_find_by_name_containing()
            .return_once(|_| stream::pending().boxed());

        let service = SearchService::new(Arc::new(users), Arc::new(companies));
        let items: Vec<_> = service.search("an").collect().await;

        assert_eq!(items.len(), 1);
        assert!(
            matches!(items.first(), Some(Err(error)) if error.code() == ErrorCode::ServiceUnavailable)
        );
    }
}
