//! Cross-entity name search hits and the stream merge behind them.
//!
//! Each search runs two independent queries (users and companies). Their
//! result streams are multiplexed with [`merge_hits`], which forwards hits in
//! arrival order and stops at the first failure.

use futures_util::stream::{self, BoxStream, StreamExt};
use serde::{Deserialize, Serialize};

use super::{Company, Error, User};

/// Discriminator telling clients which entity a hit refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HitKind {
    /// The hit is a user.
    User,
    /// The hit is a company.
    Company,
}

/// Read-only projection returned by the search endpoint.
///
/// # Examples
/// ```
/// use directory::domain::{HitKind, SearchHit};
///
/// let hit = SearchHit::new(1, "Ann", HitKind::User);
/// let json = serde_json::to_value(&hit).expect("hit serialises");
/// assert_eq!(json["type"], "USER");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    id: i64,
    name: String,
    #[serde(rename = "type")]
    kind: HitKind,
}

impl SearchHit {
    /// Build a hit from its parts.
    pub fn new(id: i64, name: impl Into<String>, kind: HitKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    /// Identifier of the matching record.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Name of the matching record.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Entity the hit refers to.
    #[must_use]
    pub fn kind(&self) -> HitKind {
        self.kind
    }
}

impl From<User> for SearchHit {
    fn from(user: User) -> Self {
        Self::new(user.id().get(), user.name(), HitKind::User)
    }
}

impl From<Company> for SearchHit {
    fn from(company: Company) -> Self {
        Self::new(company.id().get(), company.name(), HitKind::Company)
    }
}

/// Lazy, non-restartable sequence of search hits.
pub type HitStream = BoxStream<'static, Result<SearchHit, Error>>;

/// Merge two hit streams into one.
///
/// Both inputs are polled concurrently and every item is forwarded as soon
/// as it is ready, so each source keeps its own order while the interleaving
/// between sources follows arrival. The merged stream ends once both inputs
/// are exhausted, or right after the first error from either input; at that
/// point both inputs are dropped.
pub fn merge_hits(users: HitStream, companies: HitStream) -> HitStream {
    let merged = stream::select(users, companies);
    stream::unfold(Some(merged), |state| async move {
        let mut merged = state?;
        let item = merged.next().await?;
        let next = if item.is_err() { None } else { Some(merged) };
        Some((item, next))
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures_util::TryStreamExt;
    use rstest::rstest;

    use super::*;

    fn user_hit(id: i64, name: &str) -> SearchHit {
        SearchHit::new(id, name, HitKind::User)
    }

    fn company_hit(id: i64, name: &str) -> SearchHit {
        SearchHit::new(id, name, HitKind::Company)
    }

    fn from_hits(hits: Vec<SearchHit>) -> HitStream {
        stream::iter(hits.into_iter().map(Ok)).boxed()
    }

    #[rstest]
    #[tokio::test]
    async fn yields_both_sources_exactly_once() {
        let merged = merge_hits(
            from_hits(vec![user_hit(1, "Ann")]),
            from_hits(vec![company_hit(2, "Anderson Inc")]),
        );

        let mut hits: Vec<SearchHit> = merged.try_collect().await.expect("merge succeeds");
        hits.sort_by_key(SearchHit::id);

        assert_eq!(
            hits,
            vec![user_hit(1, "Ann"), company_hit(2, "Anderson Inc")]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn empty_sources_terminate() {
        let merged = merge_hits(from_hits(vec![]), from_hits(vec![]));
        let hits: Vec<SearchHit> = merged.try_collect().await.expect("merge succeeds");
        assert!(hits.is_empty());
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    #[tokio::test]
    async fn one_empty_source_yields_the_other(#[case] users_empty: bool) {
        let populated = vec![user_hit(3, "Anna"), user_hit(4, "Hannah"), user_hit(5, "Dan")];
        let (users, companies) = if users_empty {
            (from_hits(vec![]), from_hits(populated.clone()))
        } else {
            (from_hits(populated.clone()), from_hits(vec![]))
        };

        let hits: Vec<SearchHit> = merge_hits(users, companies)
            .try_collect()
            .await
            .expect("merge succeeds");

        assert_eq!(hits, populated);
    }

    #[rstest]
    #[tokio::test]
    async fn stops_after_the_first_error() {
        let failing = stream::iter(vec![
            Ok(user_hit(1, "Ann")),
            Err(Error::service_unavailable("store unavailable")),
            Ok(user_hit(2, "Annie")),
        ])
        .boxed();
        let endless = stream::repeat_with(|| Ok(company_hit(9, "Anderson Inc"))).boxed();

        let items: Vec<Result<SearchHit, Error>> = merge_hits(failing, endless).collect().await;

        let errors = items.iter().filter(|item| item.is_err()).count();
        assert_eq!(errors, 1);
        assert!(items.last().is_some_and(Result::is_err));
        assert!(!items.contains(&Ok(user_hit(2, "Annie"))));
    }

    #[rstest]
    #[tokio::test]
    async fn forwards_hits_without_waiting_for_the_slower_source() {
        let slow = stream::once(async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(user_hit(1, "Ann"))
        })
        .boxed();
        let fast = from_hits(vec![company_hit(2, "Anderson Inc")]);

        let mut merged = merge_hits(slow, fast);
        let first = merged.next().await.expect("first hit").expect("ok hit");

        assert_eq!(first, company_hit(2, "Anderson Inc"));
    }

    #[rstest]
    #[tokio::test]
    async fn preserves_each_source_order() {
        let users = vec![user_hit(1, "Ann"), user_hit(2, "Anna"), user_hit(3, "Annie")];
        let companies = vec![company_hit(10, "Anco"), company_hit(11, "Anderson Inc")];

        let hits: Vec<SearchHit> =
            merge_hits(from_hits(users.clone()), from_hits(companies.clone()))
                .try_collect()
                .await
                .expect("merge succeeds");

        let seen_users: Vec<_> = hits
            .iter()
            .filter(|hit| hit.kind() == HitKind::User)
            .cloned()
            .collect();
        let seen_companies: Vec<_> = hits
            .iter()
            .filter(|hit| hit.kind() == HitKind::Company)
            .cloned()
            .collect();
        assert_eq!(seen_users, users);
        assert_eq!(seen_companies, companies);
    }
}
