//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe what the services need from a
//! store. Driving ports (`*Command`, `*Query`, [`DirectorySearch`]) are what
//! inbound adapters call. Each driven port exposes a typed error so adapters
//! map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod company_command;
mod company_query;
mod company_repository;
mod directory_search;
mod user_command;
mod user_query;
mod user_repository;

pub use company_command::CompanyCommand;
#[cfg(test)]
pub use company_command::MockCompanyCommand;
pub use company_query::CompanyQuery;
#[cfg(test)]
pub use company_query::MockCompanyQuery;
#[cfg(test)]
pub use company_repository::MockCompanyRepository;
pub use company_repository::{CompanyPersistenceError, CompanyRepository, CompanyStream};
pub use directory_search::DirectorySearch;
#[cfg(test)]
pub use directory_search::MockDirectorySearch;
#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_command::UserCommand;
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository, UserStream};
