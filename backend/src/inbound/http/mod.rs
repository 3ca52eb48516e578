//! HTTP inbound adapter exposing REST endpoints.

pub mod companies;
pub mod error;
pub mod schemas;
pub mod search;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Every `/api/v1` route with the shared extractor settings attached.
///
/// The caller provides [`state::HttpState`] as app data.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use directory::inbound::http::{api_scope, state::HttpState};
/// use directory::outbound::memory::{InMemoryCompanyRepository, InMemoryUserRepository};
/// use std::sync::Arc;
///
/// let state = HttpState::from_repositories(
///     Arc::new(InMemoryUserRepository::new()),
///     Arc::new(InMemoryCompanyRepository::new()),
/// );
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .service(api_scope());
/// # drop(app);
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(error::json_config())
        .app_data(error::path_config())
        .app_data(error::query_config())
        .service(users::create_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(companies::create_company)
        .service(companies::list_companies)
        .service(companies::get_company)
        .service(companies::update_company)
        .service(companies::delete_company)
        .service(search::search)
}
