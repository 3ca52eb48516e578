//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and only see driving
//! ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CompanyCommand, CompanyQuery, CompanyRepository, DirectorySearch, UserCommand, UserQuery,
    UserRepository,
};
use crate::domain::{CompanyService, SearchService, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User writes.
    pub users: Arc<dyn UserCommand>,
    /// User reads.
    pub users_query: Arc<dyn UserQuery>,
    /// Company writes.
    pub companies: Arc<dyn CompanyCommand>,
    /// Company reads.
    pub companies_query: Arc<dyn CompanyQuery>,
    /// Merged name search.
    pub search: Arc<dyn DirectorySearch>,
}

impl HttpState {
    /// Wire the domain services on top of a pair of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use directory::inbound::http::state::HttpState;
    /// use directory::outbound::memory::{InMemoryCompanyRepository, InMemoryUserRepository};
    ///
    /// let state = HttpState::from_repositories(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(InMemoryCompanyRepository::new()),
    /// );
    /// # let _ = state;
    /// ```
    pub fn from_repositories<U, C>(users: Arc<U>, companies: Arc<C>) -> Self
    where
        U: UserRepository + 'static,
        C: CompanyRepository + 'static,
    {
        let user_service = Arc::new(UserService::new(users));
        let company_service = Arc::new(CompanyService::new(companies));
        let search = Arc::new(SearchService::new(
            user_service.clone(),
            company_service.clone(),
        ));
        Self {
            users: user_service.clone(),
            users_query: user_service,
            companies: company_service.clone(),
            companies_query: company_service,
            search,
        }
    }
}
