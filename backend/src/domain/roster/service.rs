//! Roster aggregation service.
//!
//! Orchestrates course resolution, one join per candidate course, and the
//! final result shape. The service is stateless: every call re-runs the whole
//! pipeline against the platform.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::{CourseFilter, CourseResolver, EnrollmentJoiner, JoinStrategy};
use crate::domain::AggregationResult;
use crate::domain::ports::{ResourceClient, RosterQuery};

/// Domain service implementing [`RosterQuery`].
///
/// Courses are joined one after another; any concurrency lives inside the
/// [`EnrollmentJoiner`] and follows its [`JoinStrategy`].
#[derive(Clone)]
pub struct RosterService {
    resolver: CourseResolver,
    joiner: EnrollmentJoiner,
}

impl RosterService {
    /// Build a service reading from `client`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// use roster::domain::ports::FixtureResourceClient;
    /// use roster::domain::{JoinStrategy, RosterService};
    ///
    /// let service = RosterService::new(Arc::new(FixtureResourceClient), JoinStrategy::default());
    /// ```
    pub fn new(client: Arc<dyn ResourceClient>, strategy: JoinStrategy) -> Self {
        Self {
            resolver: CourseResolver::new(Arc::clone(&client)),
            joiner: EnrollmentJoiner::new(client, strategy),
        }
    }
}

#[async_trait]
impl RosterQuery for RosterService {
    async fn aggregate(&self, filter: CourseFilter) -> AggregationResult {
        let kind = filter.kind();
        let courses = self.resolver.resolve(&filter).await;

        let mut rosters = Vec::with_capacity(courses.len());
        for course in &courses {
            rosters.push(self.joiner.join(course).await);
        }

        let result = match filter {
            CourseFilter::All => AggregationResult::Catalogue(rosters),
            CourseFilter::ExactName(_) => rosters
                .into_iter()
                .next()
                .map_or(AggregationResult::NoMatch, AggregationResult::Matched),
        };

        info!(
            filter = kind,
            courses = result.rosters().len(),
            records = result.record_count(),
            degraded = result.degraded_count(),
            "roster aggregated"
        );
        result
    }
}
