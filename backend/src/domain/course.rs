//! Catalogue courses as reported by the learning platform.
//!
//! A [`Course`] is an immutable snapshot fetched fresh for every aggregation;
//! nothing in the domain caches or mutates it.

use std::fmt;

/// Upstream integer identifier of a course.
///
/// # Examples
/// ```
/// use roster::domain::CourseId;
///
/// let id = CourseId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(i64);

impl CourseId {
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

impl From<i64> for CourseId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One course in the upstream catalogue.
///
/// `name` is the lookup key for exact-name searches. Upstream catalogues are
/// expected to keep names unique but do not guarantee it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Upstream identifier.
    pub id: CourseId,
    /// Display name, matched exactly by name searches.
    pub name: String,
    /// Long-form description, when the platform provides one.
    pub description: Option<String>,
    /// Marketing heading, when the platform provides one.
    pub heading: Option<String>,
    /// Whether the course is published to students.
    pub is_published: bool,
    /// Cover image reference.
    pub image_url: Option<String>,
}

impl Course {
    /// Return whether this course answers to `name`.
    ///
    /// Matching is exact and case-sensitive; no trimming or normalisation is
    /// applied to either side.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::{Course, CourseId};
    ///
    /// let course = Course {
    ///     id: CourseId::new(1),
    ///     name: "Intro".to_owned(),
    ///     description: None,
    ///     heading: None,
    ///     is_published: true,
    ///     image_url: None,
    /// };
    /// assert!(course.has_name("Intro"));
    /// assert!(!course.has_name("intro"));
    /// ```
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }
}
