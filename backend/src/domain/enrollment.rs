//! Enrollments linking one user to one course.

use super::UserId;

/// One enrollment row returned for a course.
///
/// Timestamps are opaque strings: the domain neither parses nor validates
/// them and hands them back exactly as the platform sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    /// Enrolled user.
    pub user_id: UserId,
    /// When the user enrolled.
    pub enrolled_at: String,
    /// When the user completed the course, if they have.
    pub completed_at: Option<String>,
    /// Progress in percent, `0..=100` as reported upstream.
    pub percent_complete: u32,
    /// When the enrollment lapses, if it does.
    pub expires_at: Option<String>,
}
