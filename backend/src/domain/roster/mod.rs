//! Course roster aggregation.
//!
//! A request names an optional course; the pipeline resolves candidate
//! courses, lists each course's enrollments, and joins every enrollment with
//! its user. Partial upstream failures degrade individual records or rosters
//! instead of failing the request.

mod course_resolver;
mod enrollment_joiner;
mod filter;
mod record;
mod service;
#[cfg(test)]
pub(crate) mod test_doubles;

pub use course_resolver::CourseResolver;
pub use enrollment_joiner::{
    ConcurrentJoinConfig, DEFAULT_MAX_CONCURRENT_LOOKUPS, EnrollmentJoiner, JoinStrategy,
};
pub use filter::CourseFilter;
pub use record::{AggregationResult, CourseRoster, EnrollmentRecord, Resolution};
pub use service::RosterService;
