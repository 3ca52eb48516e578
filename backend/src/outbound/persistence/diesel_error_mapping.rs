//! Shared Diesel error mapping for the directory repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{CompanyPersistenceError, UserPersistenceError};

use super::pool::PoolError;

/// Constructors shared by the repository error enums.
pub(crate) trait StoreError: Sized {
    fn connection(message: String) -> Self;
    fn query(message: String) -> Self;
    fn unique_violation(message: String) -> Self;
}

impl StoreError for UserPersistenceError {
    fn connection(message: String) -> Self {
        Self::Connection { message }
    }

    fn query(message: String) -> Self {
        Self::Query { message }
    }

    fn unique_violation(message: String) -> Self {
        Self::UniqueViolation { message }
    }
}

impl StoreError for CompanyPersistenceError {
    fn connection(message: String) -> Self {
        Self::Connection { message }
    }

    fn query(message: String) -> Self {
        Self::Query { message }
    }

    fn unique_violation(message: String) -> Self {
        Self::UniqueViolation { message }
    }
}

/// Pool failures always mean the store is unreachable.
pub(crate) fn map_pool_error<E: StoreError>(error: PoolError) -> E {
    E::connection(error.into_message())
}

/// Map a Diesel failure, keeping driver detail out of the message.
pub(crate) fn map_diesel_error<E: StoreError>(error: DieselError) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            let constraint = info.constraint_name().unwrap_or("unique constraint");
            E::unique_violation(constraint.to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            E::connection("database connection error".to_owned())
        }
        DieselError::NotFound => E::query("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => E::query("database query error".to_owned()),
        _ => E::query("database error".to_owned()),
    }
}
