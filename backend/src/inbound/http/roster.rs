//! Course roster read endpoint.
//!
//! ```text
//! GET /api/v1/roster
//! GET /api/v1/roster?course_name=Intro
//! ```
//!
//! A named search answers with a single roster object, or with a null course
//! when nothing matched. Listing every course answers with an array.

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    AggregationResult, Course, CourseFilter, CourseRoster, EnrollmentRecord, Resolution,
};
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::state::HttpState;

/// Query parameters accepted by the roster endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RosterSearchParams {
    /// Exact, case-sensitive course name. Omit or leave empty to list every
    /// course.
    #[param(example = "Intro")]
    pub course_name: Option<String>,
}

/// Course fields as reported upstream.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    /// Upstream course identifier.
    #[schema(example = 1)]
    pub id: i64,
    /// Course name.
    #[schema(example = "Intro")]
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Short heading.
    pub heading: Option<String>,
    /// Whether the course is published.
    pub is_published: bool,
    /// Cover image location.
    pub image_url: Option<String>,
}

impl From<Course> for CourseResponse {
    fn from(value: Course) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            description: value.description,
            heading: value.heading,
            is_published: value.is_published,
            image_url: value.image_url,
        }
    }
}

/// Whether a value was fully resolved upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    /// Every upstream call succeeded.
    Resolved,
    /// An upstream call failed and blank values were substituted.
    Degraded,
}

/// Provenance attached to rosters and records.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResolutionResponse {
    /// Outcome of the upstream calls behind the value.
    pub status: ResolutionStatus,
    /// Failure description, present only when degraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<Resolution> for ResolutionResponse {
    fn from(value: Resolution) -> Self {
        match value {
            Resolution::Resolved => Self {
                status: ResolutionStatus::Resolved,
                reason: None,
            },
            Resolution::Degraded { reason } => Self {
                status: ResolutionStatus::Degraded,
                reason: Some(reason),
            },
        }
    }
}

/// One enrollment joined with its user.
#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentRecordResponse {
    /// Enrolled user identifier.
    #[schema(example = 7)]
    pub user_id: i64,
    /// Enrollment timestamp as reported upstream.
    #[schema(example = "2024-01-15T08:00:00Z")]
    pub enrolled_at: String,
    /// Completion timestamp, null while incomplete.
    pub completed_at: Option<String>,
    /// Progress in percent.
    #[schema(example = 40)]
    pub percent_complete: u32,
    /// Expiry timestamp, null when the enrollment does not expire.
    pub expires_at: Option<String>,
    /// User display name, empty when the lookup degraded.
    pub user_name: String,
    /// User email, empty when the lookup degraded.
    pub user_email: String,
    /// Outcome of the user lookup.
    pub resolution: ResolutionResponse,
}

impl From<EnrollmentRecord> for EnrollmentRecordResponse {
    fn from(value: EnrollmentRecord) -> Self {
        Self {
            user_id: value.user_id.get(),
            enrolled_at: value.enrolled_at,
            completed_at: value.completed_at,
            percent_complete: value.percent_complete,
            expires_at: value.expires_at,
            user_name: value.user_name,
            user_email: value.user_email,
            resolution: value.resolution.into(),
        }
    }
}

/// A course with its joined enrollments.
///
/// `course` is null, `enrollments` empty and `resolution` absent when a named
/// search found nothing.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseRosterResponse {
    /// The course, or null for an unmatched search.
    pub course: Option<CourseResponse>,
    /// Joined records in upstream enrollment order.
    pub enrollments: Vec<EnrollmentRecordResponse>,
    /// Outcome of the enrollment listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<ResolutionResponse>,
}

impl CourseRosterResponse {
    fn no_match() -> Self {
        Self {
            course: None,
            enrollments: Vec::new(),
            resolution: None,
        }
    }
}

impl From<CourseRoster> for CourseRosterResponse {
    fn from(value: CourseRoster) -> Self {
        Self {
            course: Some(value.course.into()),
            enrollments: value.enrollments.into_iter().map(Into::into).collect(),
            resolution: Some(value.resolution.into()),
        }
    }
}

/// Roster endpoint body: one roster for a search, an array for a listing.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum RosterResponse {
    /// Result of a named search.
    Single(CourseRosterResponse),
    /// Every course in upstream order.
    Catalogue(Vec<CourseRosterResponse>),
}

impl From<AggregationResult> for RosterResponse {
    fn from(value: AggregationResult) -> Self {
        match value {
            AggregationResult::Matched(roster) => Self::Single(roster.into()),
            AggregationResult::NoMatch => Self::Single(CourseRosterResponse::no_match()),
            AggregationResult::Catalogue(rosters) => {
                Self::Catalogue(rosters.into_iter().map(Into::into).collect())
            }
        }
    }
}

/// Aggregate course enrollments with their users.
#[utoipa::path(
    get,
    path = "/api/v1/roster",
    description = "Join course enrollments with user names and emails. Upstream failures degrade individual records instead of failing the request. Example request: GET /api/v1/roster?course_name=Intro",
    params(RosterSearchParams),
    responses(
        (
            status = 200,
            description = "Roster for the named course, or every course",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = RosterResponse
        )
    ),
    tags = ["roster"],
    operation_id = "getRoster"
)]
#[get("/roster")]
pub async fn get_roster(
    state: web::Data<HttpState>,
    params: Option<web::Query<RosterSearchParams>>,
) -> HttpResponse {
    let params = params.map(web::Query::into_inner).unwrap_or_default();
    let filter = CourseFilter::from_param(params.course_name.as_deref());
    let result = state.roster.aggregate(filter).await;
    HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(RosterResponse::from(result))
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;
