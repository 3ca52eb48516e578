//! Diesel table definitions for the `application` schema.
//!
//! These must match `backend/db/schema.sql`. The service never creates or
//! migrates tables itself.

diesel::table! {
    /// Registered users. `email` carries a unique index.
    application.users (id) {
        /// Store-assigned identifier (`bigserial`).
        id -> Int8,
        /// Display name.
        name -> Varchar,
        /// Unique email address.
        email -> Varchar,
        /// Age in years.
        age -> Int4,
        /// Owning company; not a foreign key.
        company_id -> Int8,
    }
}

diesel::table! {
    /// Companies.
    application.companies (id) {
        /// Store-assigned identifier (`bigserial`).
        id -> Int8,
        /// Company name.
        name -> Varchar,
        /// Postal address.
        address -> Varchar,
    }
}
