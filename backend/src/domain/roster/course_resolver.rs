//! Candidate course selection.

use std::sync::Arc;

use tracing::warn;

use super::CourseFilter;
use crate::domain::Course;
use crate::domain::ports::ResourceClient;

/// Turns a [`CourseFilter`] into the courses an aggregation should cover.
///
/// The catalogue is listed once per call; only its first page is consulted.
#[derive(Clone)]
pub struct CourseResolver {
    client: Arc<dyn ResourceClient>,
}

impl CourseResolver {
    /// Build a resolver reading from `client`.
    pub fn new(client: Arc<dyn ResourceClient>) -> Self {
        Self { client }
    }

    /// Return the candidate courses for `filter`.
    ///
    /// `All` yields the catalogue in upstream order. `ExactName` yields the
    /// first course with that exact name, or nothing. A failed catalogue fetch
    /// is logged and yields nothing.
    ///
    /// ```rust,ignore
    /// let courses = resolver
    ///     .resolve(&CourseFilter::ExactName("Advanced".to_owned()))
    ///     .await;
    /// assert!(courses.len() <= 1);
    /// ```
    pub async fn resolve(&self, filter: &CourseFilter) -> Vec<Course> {
        let catalogue = match self.client.list_courses().await {
            Ok(courses) => courses,
            Err(error) => {
                warn!(
                    %error,
                    filter = filter.kind(),
                    "course listing failed; resolving to no candidate courses"
                );
                return Vec::new();
            }
        };

        match filter {
            CourseFilter::All => catalogue,
            CourseFilter::ExactName(name) => catalogue
                .into_iter()
                .find(|course| course.has_name(name))
                .into_iter()
                .collect(),
        }
    }
}
