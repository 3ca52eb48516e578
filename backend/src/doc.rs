//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the request/response bodies and the schema wrappers for domain types
//! ([`ErrorSchema`], [`ErrorCodeSchema`], [`SearchHitSchema`],
//! [`HitKindSchema`]).
//!
//! The generated document is served by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::companies::{CompanyRequest, CompanyResponse};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, HitKindSchema, SearchHitSchema,
};
use crate::inbound::http::users::{UserRequest, UserResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Directory API",
        description = "Users, companies, and a streamed search across both."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::companies::create_company,
        crate::inbound::http::companies::list_companies,
        crate::inbound::http::companies::get_company,
        crate::inbound::http::companies::update_company,
        crate::inbound::http::companies::delete_company,
        crate::inbound::http::search::search,
    ),
    components(schemas(
        UserRequest,
        UserResponse,
        CompanyRequest,
        CompanyResponse,
        ErrorSchema,
        ErrorCodeSchema,
        SearchHitSchema,
        HitKindSchema
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "companies", description = "Operations related to companies"),
        (name = "search", description = "Name search across users and companies")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI registration and schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/v1/user")]
    #[case("/api/v1/user/{id}")]
    #[case("/api/v1/company")]
    #[case("/api/v1/company/{id}")]
    #[case("/api/v1/search")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    #[case("Error", "traceId")]
    #[case("Error", "code")]
    #[case("SearchHit", "type")]
    #[case("UserResponse", "email")]
    #[case("CompanyResponse", "users")]
    fn schemas_expose_wire_fields(#[case] schema: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let found = schemas.get(schema).expect("schema registered");
        assert_object_schema_has_field(found, field);
    }
}
