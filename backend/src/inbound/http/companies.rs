//! Company API handlers.
//!
//! ```text
//! POST   /api/v1/company {"name":"Anderson Inc","address":"1 Main St"}
//! GET    /api/v1/company
//! GET    /api/v1/company/{id}
//! PUT    /api/v1/company/{id}
//! DELETE /api/v1/company/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Company, CompanyDraft, CompanyId, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::UserResponse;

/// Request body for creating or replacing a company.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CompanyRequest {
    /// Company name.
    #[schema(example = "Anderson Inc")]
    pub name: String,
    /// Postal address.
    #[schema(example = "1 Main St")]
    pub address: String,
}

impl From<CompanyRequest> for CompanyDraft {
    fn from(value: CompanyRequest) -> Self {
        Self::new(value.name, value.address)
    }
}

/// Company as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CompanyResponse {
    /// Store-assigned identifier.
    #[schema(example = 2)]
    pub id: i64,
    /// Company name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Members of the company. Endpoints never load these, so the list is
    /// always empty.
    pub users: Vec<UserResponse>,
}

impl CompanyResponse {
    /// Build a response that lists `users` as members.
    pub fn with_users(company: Company, users: Vec<User>) -> Self {
        Self {
            id: company.id().get(),
            name: company.name().to_owned(),
            address: company.address().to_owned(),
            users: users.into_iter().map(UserResponse::from).collect(),
        }
    }
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self::with_users(company, Vec::new())
    }
}

/// Create a company.
#[utoipa::path(
    post,
    path = "/api/v1/company",
    request_body = CompanyRequest,
    responses(
        (status = 200, description = "Company created", body = CompanyResponse),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 409, description = "Rejected by a store constraint", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "createCompany"
)]
#[post("/company")]
pub async fn create_company(
    state: web::Data<HttpState>,
    payload: web::Json<CompanyRequest>,
) -> ApiResult<web::Json<CompanyResponse>> {
    let draft = CompanyDraft::from(payload.into_inner());
    let company = state.companies.create(draft).await?;
    Ok(web::Json(company.into()))
}

/// List companies.
#[utoipa::path(
    get,
    path = "/api/v1/company",
    responses(
        (status = 200, description = "Companies", body = [CompanyResponse]),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "listCompanies"
)]
#[get("/company")]
pub async fn list_companies(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CompanyResponse>>> {
    let companies = state.companies_query.list().await?;
    Ok(web::Json(
        companies.into_iter().map(CompanyResponse::from).collect(),
    ))
}

/// Fetch one company.
#[utoipa::path(
    get,
    path = "/api/v1/company/{id}",
    params(("id" = i64, Path, description = "Company identifier")),
    responses(
        (status = 200, description = "Company", body = CompanyResponse),
        (status = 404, description = "Unknown company", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "getCompany"
)]
#[get("/company/{id}")]
pub async fn get_company(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<CompanyResponse>> {
    let company = state
        .companies_query
        .find(CompanyId::new(path.into_inner()))
        .await?;
    Ok(web::Json(company.into()))
}

/// Replace every field of a company.
#[utoipa::path(
    put,
    path = "/api/v1/company/{id}",
    params(("id" = i64, Path, description = "Company identifier")),
    request_body = CompanyRequest,
    responses(
        (status = 200, description = "Company updated", body = CompanyResponse),
        (status = 400, description = "Malformed body or id", body = ErrorSchema),
        (status = 404, description = "Unknown company", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "updateCompany"
)]
#[put("/company/{id}")]
pub async fn update_company(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<CompanyRequest>,
) -> ApiResult<web::Json<CompanyResponse>> {
    let draft = CompanyDraft::from(payload.into_inner());
    let company = state
        .companies
        .update(CompanyId::new(path.into_inner()), draft)
        .await?;
    Ok(web::Json(company.into()))
}

/// Delete a company. Users referencing it are left as they are.
#[utoipa::path(
    delete,
    path = "/api/v1/company/{id}",
    params(("id" = i64, Path, description = "Company identifier")),
    responses(
        (status = 200, description = "Company deleted"),
        (status = 404, description = "Unknown company", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "deleteCompany"
)]
#[delete("/company/{id}")]
pub async fn delete_company(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .companies
        .delete(CompanyId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().finish())
}
