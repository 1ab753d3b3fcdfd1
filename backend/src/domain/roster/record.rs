//! Joined roster records and the aggregation result shape.
//!
//! Records are transient: built once per enrollment during a request and
//! dropped after serialisation. Provenance is explicit so that a blank user
//! name caused by an upstream failure is distinguishable from a blank name the
//! platform really holds.

use crate::domain::{Course, Enrollment, User, UserId};

/// Whether a piece of the roster was fully resolved upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Every upstream call behind this value succeeded.
    Resolved,
    /// An upstream call failed and zero values were substituted.
    Degraded {
        /// Human-readable failure description.
        reason: String,
    },
}

impl Resolution {
    /// Build a degraded marker from any displayable failure.
    pub fn degraded(reason: impl ToString) -> Self {
        Self::Degraded {
            reason: reason.to_string(),
        }
    }

    /// Return whether this value carries substituted data.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// One enrollment joined with its user's name and email.
///
/// ## Invariants
/// - `user_id` always equals the source enrollment's user id, whatever the
///   user lookup returned.
/// - A degraded record keeps every enrollment field and carries empty
///   `user_name` and `user_email`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRecord {
    /// Enrolled user.
    pub user_id: UserId,
    /// Opaque enrollment timestamp.
    pub enrolled_at: String,
    /// Opaque completion timestamp.
    pub completed_at: Option<String>,
    /// Progress in percent.
    pub percent_complete: u32,
    /// Opaque expiry timestamp.
    pub expires_at: Option<String>,
    /// Resolved user display name, empty when degraded.
    pub user_name: String,
    /// Resolved user email, empty when degraded.
    pub user_email: String,
    /// Outcome of the user lookup.
    pub resolution: Resolution,
}

impl EnrollmentRecord {
    /// Join an enrollment with the user it references.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::{Enrollment, EnrollmentRecord, User, UserId};
    ///
    /// let enrollment = Enrollment {
    ///     user_id: UserId::new(7),
    ///     enrolled_at: "2024-01-01T00:00:00Z".to_owned(),
    ///     completed_at: None,
    ///     percent_complete: 40,
    ///     expires_at: None,
    /// };
    /// let user = User {
    ///     id: UserId::new(7),
    ///     name: "Ada".to_owned(),
    ///     email: "ada@example.com".to_owned(),
    ///     role: "student".to_owned(),
    ///     last_sign_in_ip: None,
    ///     courses: Vec::new(),
    /// };
    /// let record = EnrollmentRecord::resolved(enrollment, &user);
    /// assert_eq!(record.user_name, "Ada");
    /// assert!(!record.resolution.is_degraded());
    /// ```
    #[must_use]
    pub fn resolved(enrollment: Enrollment, user: &User) -> Self {
        Self::assemble(
            enrollment,
            user.name.clone(),
            user.email.clone(),
            Resolution::Resolved,
        )
    }

    /// Keep an enrollment whose user could not be resolved.
    pub fn degraded(enrollment: Enrollment, reason: impl ToString) -> Self {
        Self::assemble(
            enrollment,
            String::new(),
            String::new(),
            Resolution::degraded(reason),
        )
    }

    fn assemble(
        enrollment: Enrollment,
        user_name: String,
        user_email: String,
        resolution: Resolution,
    ) -> Self {
        let Enrollment {
            user_id,
            enrolled_at,
            completed_at,
            percent_complete,
            expires_at,
        } = enrollment;
        Self {
            user_id,
            enrolled_at,
            completed_at,
            percent_complete,
            expires_at,
            user_name,
            user_email,
            resolution,
        }
    }
}

/// A course paired with its joined enrollments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRoster {
    /// The course the enrollments belong to.
    pub course: Course,
    /// Joined records in upstream enrollment order.
    pub enrollments: Vec<EnrollmentRecord>,
    /// Outcome of the enrollment listing for this course.
    pub resolution: Resolution,
}

impl CourseRoster {
    /// Pair a course with its joined records.
    #[must_use]
    pub fn resolved(course: Course, enrollments: Vec<EnrollmentRecord>) -> Self {
        Self {
            course,
            enrollments,
            resolution: Resolution::Resolved,
        }
    }

    /// Report a course whose enrollments could not be listed.
    pub fn degraded(course: Course, reason: impl ToString) -> Self {
        Self {
            course,
            enrollments: Vec::new(),
            resolution: Resolution::degraded(reason),
        }
    }

    /// Count records whose user lookup was degraded.
    #[must_use]
    pub fn degraded_record_count(&self) -> usize {
        self.enrollments
            .iter()
            .filter(|record| record.resolution.is_degraded())
            .count()
    }
}

/// Outcome of one aggregation.
///
/// `NoMatch` ("searched, found nothing") and an empty `Catalogue` ("listed
/// everything, there is nothing") are deliberately distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregationResult {
    /// Exact-name search found a course.
    Matched(CourseRoster),
    /// Exact-name search found no course.
    NoMatch,
    /// Every course in upstream order.
    Catalogue(Vec<CourseRoster>),
}

impl AggregationResult {
    /// Borrow every roster carried by this result.
    #[must_use]
    pub fn rosters(&self) -> &[CourseRoster] {
        match self {
            Self::Matched(roster) => std::slice::from_ref(roster),
            Self::NoMatch => &[],
            Self::Catalogue(rosters) => rosters.as_slice(),
        }
    }

    /// Total number of joined records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.rosters()
            .iter()
            .map(|roster| roster.enrollments.len())
            .sum()
    }

    /// Number of degraded rosters plus degraded records.
    #[must_use]
    pub fn degraded_count(&self) -> usize {
        self.rosters()
            .iter()
            .map(|roster| {
                usize::from(roster.resolution.is_degraded()) + roster.degraded_record_count()
            })
            .sum()
    }
}
