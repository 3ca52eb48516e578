//! Internal Diesel row structs.
//!
//! Row types never leave the persistence layer; they convert into domain
//! records without further checks.

use diesel::prelude::*;

use crate::domain::{Company, CompanyDraft, CompanyId, User, UserDraft, UserId};

use super::schema::{companies, users};

/// Row read from `application.users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub company_id: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let draft = UserDraft::new(row.name, row.email, row.age, CompanyId::new(row.company_id));
        Self::new(UserId::new(row.id), draft)
    }
}

/// Column values written on insert and update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserValues<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub age: i32,
    pub company_id: i64,
}

impl<'a> From<&'a UserDraft> for UserValues<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: draft.name(),
            email: draft.email(),
            age: draft.age(),
            company_id: draft.company_id().get(),
        }
    }
}

/// Row read from `application.companies`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CompanyRow {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self::new(CompanyId::new(row.id), CompanyDraft::new(row.name, row.address))
    }
}

/// Column values written on insert and update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = companies)]
pub(crate) struct CompanyValues<'a> {
    pub name: &'a str,
    pub address: &'a str,
}

impl<'a> From<&'a CompanyDraft> for CompanyValues<'a> {
    fn from(draft: &'a CompanyDraft) -> Self {
        Self {
            name: draft.name(),
            address: draft.address(),
        }
    }
}
