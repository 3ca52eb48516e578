//! Builders for the HTTP state from the configured store.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use directory::inbound::http::state::HttpState;
use directory::outbound::memory::{InMemoryCompanyRepository, InMemoryUserRepository};
use directory::outbound::persistence::{DbPool, DieselCompanyRepository, DieselUserRepository};

use super::ServerConfig;

/// Wire the domain services over PostgreSQL when a pool is configured,
/// otherwise over the in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(state_for_pool(config.db_pool.as_ref()))
}

fn state_for_pool(pool: Option<&DbPool>) -> HttpState {
    match pool {
        Some(pool) => {
            info!(store = "postgres", "using database-backed repositories");
            HttpState::from_repositories(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselCompanyRepository::new(pool.clone())),
            )
        }
        None => {
            info!(store = "memory", "no database configured; using in-memory repositories");
            HttpState::from_repositories(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryCompanyRepository::new()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    #[tokio::test]
    async fn without_a_pool_the_memory_store_is_live() {
        let addr: SocketAddr = "127.0.0.1:0".parse().expect("valid address");
        let state = build_http_state(&ServerConfig::new(addr));

        let users = state.users_query.list().await.expect("memory store lists");
        assert!(users.is_empty());
        let companies = state.companies_query.list().await.expect("memory store lists");
        assert!(companies.is_empty());
    }
}
