//! Per-course enrollment join.
//!
//! For one course the joiner lists enrollments, then resolves the user behind
//! each one. The concurrent strategy fans user lookups out onto Tokio tasks and
//! writes each result into the slot matching its enrollment's position, so the
//! output order never depends on which lookup finishes first.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::domain::ports::{FetchError, ResourceClient};
use crate::domain::{Course, CourseRoster, Enrollment, EnrollmentRecord, TraceId, User, UserId};

/// Default cap on user lookups in flight for one course.
pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 16;

/// Settings for the concurrent join strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrentJoinConfig {
    /// Maximum user lookups in flight at once. Zero is treated as one.
    pub max_in_flight: usize,
    /// Optional budget for a single user lookup. An expired lookup degrades
    /// its own record only.
    pub lookup_timeout: Option<Duration>,
}

impl Default for ConcurrentJoinConfig {
    fn default() -> Self {
        Self {
            max_in_flight: DEFAULT_MAX_CONCURRENT_LOOKUPS,
            lookup_timeout: None,
        }
    }
}

/// How user lookups are scheduled within one course.
///
/// Both strategies produce identical records. `Concurrent` takes roughly the
/// slowest lookup's latency per batch of `max_in_flight`; `Sequential` takes
/// the sum of every lookup's latency and issues one upstream call at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStrategy {
    /// One task per enrollment, bounded by a semaphore.
    Concurrent(ConcurrentJoinConfig),
    /// One lookup at a time, in enrollment order.
    Sequential,
}

impl Default for JoinStrategy {
    fn default() -> Self {
        Self::Concurrent(ConcurrentJoinConfig::default())
    }
}

/// Joins one course's enrollments with their users.
#[derive(Clone)]
pub struct EnrollmentJoiner {
    client: Arc<dyn ResourceClient>,
    strategy: JoinStrategy,
}

impl EnrollmentJoiner {
    /// Build a joiner reading from `client` with the given strategy.
    pub fn new(client: Arc<dyn ResourceClient>, strategy: JoinStrategy) -> Self {
        Self { client, strategy }
    }

    /// Build the roster for `course`.
    ///
    /// Records follow the upstream enrollment order. A failed enrollment
    /// listing yields a degraded roster with no records; a failed user lookup
    /// yields a degraded record with blank user fields. Neither aborts.
    ///
    /// ```rust,ignore
    /// let roster = joiner.join(&course).await;
    /// assert_eq!(roster.course.id, course.id);
    /// ```
    pub async fn join(&self, course: &Course) -> CourseRoster {
        let enrollments = match self.client.list_enrollments(course.id).await {
            Ok(enrollments) => enrollments,
            Err(error) => {
                warn!(
                    course_id = %course.id,
                    %error,
                    "enrollment listing failed; reporting course without enrollments"
                );
                return CourseRoster::degraded(course.clone(), error);
            }
        };

        let records = match self.strategy {
            JoinStrategy::Concurrent(config) => {
                join_concurrently(&self.client, enrollments, config).await
            }
            JoinStrategy::Sequential => join_sequentially(self.client.as_ref(), enrollments).await,
        };
        debug!(
            course_id = %course.id,
            records = records.len(),
            "joined course enrollments"
        );
        CourseRoster::resolved(course.clone(), records)
    }
}

async fn join_sequentially(
    client: &dyn ResourceClient,
    enrollments: Vec<Enrollment>,
) -> Vec<EnrollmentRecord> {
    let mut records = Vec::with_capacity(enrollments.len());
    for enrollment in enrollments {
        let outcome = client.get_user(enrollment.user_id).await;
        records.push(join_record(enrollment, outcome));
    }
    records
}

async fn join_concurrently(
    client: &Arc<dyn ResourceClient>,
    enrollments: Vec<Enrollment>,
    config: ConcurrentJoinConfig,
) -> Vec<EnrollmentRecord> {
    let permits = Arc::new(Semaphore::new(config.max_in_flight.max(1)));
    let mut slots: Vec<Option<EnrollmentRecord>> = vec![None; enrollments.len()];
    let mut lookups = JoinSet::new();

    for (slot, enrollment) in enrollments.iter().cloned().enumerate() {
        let client = Arc::clone(client);
        let permits = Arc::clone(&permits);
        lookups.spawn(TraceId::inherit(async move {
            let outcome = lookup_user(
                client.as_ref(),
                &permits,
                enrollment.user_id,
                config.lookup_timeout,
            )
            .await;
            (slot, join_record(enrollment, outcome))
        }));
    }

    while let Some(joined) = lookups.join_next().await {
        match joined {
            Ok((slot, record)) => {
                if let Some(cell) = slots.get_mut(slot) {
                    *cell = Some(record);
                }
            }
            Err(error) => {
                warn!(%error, "user lookup task aborted; its enrollment is kept degraded");
            }
        }
    }

    slots
        .into_iter()
        .zip(enrollments)
        .map(|(slot, enrollment)| {
            slot.unwrap_or_else(|| {
                EnrollmentRecord::degraded(enrollment, "user lookup task did not complete")
            })
        })
        .collect()
}

async fn lookup_user(
    client: &dyn ResourceClient,
    permits: &Semaphore,
    user_id: UserId,
    timeout: Option<Duration>,
) -> Result<User, FetchError> {
    let _permit = permits
        .acquire()
        .await
        .map_err(|_| FetchError::transport("user lookup permits closed"))?;

    let lookup = client.get_user(user_id);
    match timeout {
        Some(limit) => tokio::time::timeout(limit, lookup).await.map_err(|_| {
            FetchError::timeout(format!(
                "user {user_id} lookup exceeded {}ms",
                limit.as_millis()
            ))
        })?,
        None => lookup.await,
    }
}

fn join_record(enrollment: Enrollment, outcome: Result<User, FetchError>) -> EnrollmentRecord {
    match outcome {
        Ok(user) => EnrollmentRecord::resolved(enrollment, &user),
        Err(error) => {
            warn!(
                user_id = %enrollment.user_id,
                %error,
                "user lookup failed; keeping enrollment with blank user fields"
            );
            EnrollmentRecord::degraded(enrollment, error)
        }
    }
}

#[cfg(test)]
#[path = "enrollment_joiner_tests.rs"]
mod tests;
