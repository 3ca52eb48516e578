//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::memory::{InMemoryCompanyRepository, InMemoryUserRepository};

/// State backed by fresh in-memory repositories.
pub fn memory_state() -> HttpState {
    HttpState::from_repositories(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryCompanyRepository::new()),
    )
}

/// Application with the full API mounted over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}
