//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the roster endpoint, the health probes, and the
//! response DTOs from the inbound layer. Domain types stay free of utoipa.
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::roster::{
    CourseResponse, CourseRosterResponse, EnrollmentRecordResponse, ResolutionResponse,
    ResolutionStatus, RosterResponse,
};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course roster API",
        description = "Joins learning platform courses, enrollments, and users into one roster view."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::roster::get_roster,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RosterResponse,
        CourseRosterResponse,
        CourseResponse,
        EnrollmentRecordResponse,
        ResolutionResponse,
        ResolutionStatus
    )),
    tags(
        (name = "roster", description = "Course enrollment rosters"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
