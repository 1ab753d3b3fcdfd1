//! Driven port for reading courses, enrollments, and users from the
//! learning platform.
//!
//! The platform exposes the three resources separately and offers no join.
//! The domain owns the resource shapes; adapters own transport, credentials,
//! and decoding.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Course, CourseId, Enrollment, User, UserId};

define_port_error! {
    /// Errors surfaced while fetching one upstream resource.
    pub enum FetchError {
        /// Network transport failed before a response was received.
        Transport { message: String } =>
            "learning platform transport failed: {message}",
        /// The call exceeded its time budget.
        Timeout { message: String } =>
            "learning platform call timed out: {message}",
        /// The platform answered with a non-success status.
        Status { status: u16, message: String } =>
            "learning platform returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "learning platform response decode failed: {message}",
    }
}

/// Port for one-shot reads against the learning platform.
///
/// Only the first page of any listing is consulted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// List the catalogue's courses in upstream order.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use roster::domain::ports::{FixtureResourceClient, ResourceClient};
    ///
    /// let courses = FixtureResourceClient.list_courses().await?;
    /// assert!(courses.is_empty());
    /// # Ok::<(), roster::domain::ports::FetchError>(())
    /// ```
    async fn list_courses(&self) -> Result<Vec<Course>, FetchError>;

    /// List the enrollments of one course in upstream order.
    async fn list_enrollments(&self, course_id: CourseId) -> Result<Vec<Enrollment>, FetchError>;

    /// Fetch one user by identifier.
    async fn get_user(&self, user_id: UserId) -> Result<User, FetchError>;
}

/// Fixture implementation backed by an empty catalogue.
///
/// Used when the service runs without upstream credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureResourceClient;

#[async_trait]
impl ResourceClient for FixtureResourceClient {
    async fn list_courses(&self) -> Result<Vec<Course>, FetchError> {
        Ok(Vec::new())
    }

    async fn list_enrollments(&self, _course_id: CourseId) -> Result<Vec<Enrollment>, FetchError> {
        Ok(Vec::new())
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, FetchError> {
        Err(FetchError::status(404_u16, format!("user {user_id} not found")))
    }
}
