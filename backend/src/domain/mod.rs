//! Domain primitives, services, and ports.
//!
//! Purpose: define the User and Company records, the search hit projection,
//! and the services that enforce uniqueness and existence rules before the
//! store is touched. Nothing here depends on actix or diesel.
//!
//! Public surface:
//! - `User`, `UserDraft`, `UserId`: persisted and unpersisted users.
//! - `Company`, `CompanyDraft`, `CompanyId`: the same for companies.
//! - `SearchHit`, `HitStream`, `merge_hits`: cross-entity search.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `UserService`, `CompanyService`, `SearchService`: driving port
//!   implementations.

pub mod company;
pub mod company_service;
pub mod error;
pub mod ports;
pub mod search;
pub mod search_service;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::company::{Company, CompanyDraft, CompanyId};
pub use self::company_service::CompanyService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::search::{HitKind, HitStream, SearchHit, merge_hits};
pub use self::search_service::SearchService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId};
pub use self::user_service::UserService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use directory::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("User not found"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
