//! Domain primitives, ports, and the roster aggregation pipeline.
//!
//! Domain types remain framework-agnostic: serialisation and OpenAPI schemas
//! live in the inbound and outbound adapters.
//!
//! Public surface:
//! - Course, Enrollment, User: upstream learning platform entities.
//! - RosterService: the `RosterQuery` implementation over a `ResourceClient`.
//! - TraceId: request correlation identifier in task-local storage.

mod course;
mod enrollment;
pub mod ports;
pub mod roster;
mod trace_id;
mod user;

pub use self::course::{Course, CourseId};
pub use self::enrollment::Enrollment;
pub use self::roster::{
    AggregationResult, ConcurrentJoinConfig, CourseFilter, CourseResolver, CourseRoster,
    DEFAULT_MAX_CONCURRENT_LOOKUPS, EnrollmentJoiner, EnrollmentRecord, JoinStrategy, Resolution,
    RosterService,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserCourseMembership, UserId};
