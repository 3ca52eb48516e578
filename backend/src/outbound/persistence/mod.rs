//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel rows and domain records and map
//! driver failures into the typed port errors. They hold no business rules:
//! email uniqueness and existence checks live in the services, while the
//! unique index on `users.email` backs them up under concurrent writes.
//!
//! # Example
//!
//! ```no_run
//! use directory::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), directory::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/directory")).await?;
//! let users = DieselUserRepository::new(pool);
//! # drop(users);
//! # Ok(())
//! # }
//! ```

mod diesel_company_repository;
mod diesel_error_mapping;
mod diesel_user_repository;
mod models;
mod pool;
mod row_stream;
mod schema;

pub use diesel_company_repository::DieselCompanyRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

/// `ILIKE` pattern matching any value that contains `fragment` literally.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
