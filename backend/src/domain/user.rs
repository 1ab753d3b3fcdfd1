//! Learning-platform users resolved while joining enrollments.

use std::fmt;

/// Upstream integer identifier of a user.
///
/// # Examples
/// ```
/// use roster::domain::UserId;
///
/// assert_eq!(UserId::new(8).to_string(), "8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw upstream identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the raw upstream identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course membership listed on the user's own upstream record.
///
/// The platform embeds these in every user payload. The roster join does not
/// read them; enrollments are always taken from the course side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCourseMembership {
    /// Course identifier.
    pub course_id: i64,
    /// Course name at the time of the request.
    pub course_name: String,
    /// Opaque enrollment timestamp.
    pub enrolled_at: Option<String>,
    /// Whether the enrollment is still active.
    pub is_active_enrollment: bool,
    /// Opaque completion timestamp.
    pub completed_at: Option<String>,
    /// Progress in percent.
    pub percent_complete: u32,
}

/// A user of the learning platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Upstream identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Platform role (for example `student` or `owner`).
    pub role: String,
    /// Last IP address the user signed in from.
    pub last_sign_in_ip: Option<String>,
    /// Memberships reported on the user record.
    pub courses: Vec<UserCourseMembership>,
}
