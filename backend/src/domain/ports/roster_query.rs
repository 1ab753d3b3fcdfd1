//! Driving port for roster aggregation.
//!
//! Inbound adapters call this port with a parsed [`CourseFilter`] and
//! serialise whatever comes back. The aggregation itself never fails: upstream
//! problems surface as degraded rosters, not as errors.

use async_trait::async_trait;

use crate::domain::{AggregationResult, CourseFilter};

/// Port answering "who is enrolled in which course".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterQuery: Send + Sync {
    /// Resolve, join, and assemble the roster for `filter`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use roster::domain::{AggregationResult, CourseFilter};
    /// use roster::domain::ports::{FixtureRosterQuery, RosterQuery};
    ///
    /// let result = FixtureRosterQuery.aggregate(CourseFilter::All).await;
    /// assert_eq!(result, AggregationResult::Catalogue(Vec::new()));
    /// ```
    async fn aggregate(&self, filter: CourseFilter) -> AggregationResult;
}

/// Fixture implementation reporting an empty catalogue.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureRosterQuery;

#[async_trait]
impl RosterQuery for FixtureRosterQuery {
    async fn aggregate(&self, filter: CourseFilter) -> AggregationResult {
        match filter {
            CourseFilter::All => AggregationResult::Catalogue(Vec::new()),
            CourseFilter::ExactName(_) => AggregationResult::NoMatch,
        }
    }
}
