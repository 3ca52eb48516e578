//! Directory backend library modules.
//!
//! The crate follows a ports-and-adapters layout: [`domain`] holds entities,
//! services, and port traits; [`inbound`] exposes them over HTTP; and
//! [`outbound`] provides PostgreSQL and in-memory stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
