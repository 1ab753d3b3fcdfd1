//! Scripted `ResourceClient` double for roster tests.
//!
//! Unlike the mockall double it can delay individual user lookups and
//! records how many lookups overlap, which the ordering and concurrency
//! tests need.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{FetchError, ResourceClient};
use crate::domain::{Course, CourseId, Enrollment, User, UserId};

/// Build a course with only the fields the join cares about.
pub(crate) fn course(id: i64, name: &str) -> Course {
    Course {
        id: CourseId::new(id),
        name: name.to_owned(),
        description: None,
        heading: Some(format!("{name} heading")),
        is_published: true,
        image_url: None,
    }
}

/// Build an enrollment whose timestamps encode the user id.
pub(crate) fn enrollment(user_id: i64) -> Enrollment {
    Enrollment {
        user_id: UserId::new(user_id),
        enrolled_at: format!("2024-01-{:02}T08:00:00Z", user_id % 28 + 1),
        completed_at: (user_id % 2 == 0).then(|| "2024-06-01T12:00:00Z".to_owned()),
        percent_complete: u32::try_from(user_id % 101).unwrap_or(0),
        expires_at: None,
    }
}

/// Build a user whose name and email encode the id.
pub(crate) fn user(user_id: i64) -> User {
    User {
        id: UserId::new(user_id),
        name: format!("User {user_id}"),
        email: format!("user{user_id}@example.com"),
        role: "student".to_owned(),
        last_sign_in_ip: None,
        courses: Vec::new(),
    }
}

#[derive(Default)]
pub(crate) struct ScriptedClient {
    courses: Option<Vec<Course>>,
    enrollments: HashMap<CourseId, Option<Vec<Enrollment>>>,
    failing_users: Vec<UserId>,
    delays: HashMap<UserId, Duration>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    user_calls: AtomicUsize,
}

impl ScriptedClient {
    pub(crate) fn with_courses(mut self, courses: Vec<Course>) -> Self {
        self.courses = Some(courses);
        self
    }

    pub(crate) fn with_enrollments(mut self, course_id: i64, enrollments: Vec<Enrollment>) -> Self {
        self.enrollments
            .insert(CourseId::new(course_id), Some(enrollments));
        self
    }

    pub(crate) fn failing_enrollments(mut self, course_id: i64) -> Self {
        self.enrollments.insert(CourseId::new(course_id), None);
        self
    }

    pub(crate) fn failing_user(mut self, user_id: i64) -> Self {
        self.failing_users.push(UserId::new(user_id));
        self
    }

    pub(crate) fn delayed_user(mut self, user_id: i64, delay: Duration) -> Self {
        self.delays.insert(UserId::new(user_id), delay);
        self
    }

    pub(crate) fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub(crate) fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    pub(crate) fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResourceClient for ScriptedClient {
    async fn list_courses(&self) -> Result<Vec<Course>, FetchError> {
        self.courses
            .clone()
            .ok_or_else(|| FetchError::transport("connection refused"))
    }

    async fn list_enrollments(&self, course_id: CourseId) -> Result<Vec<Enrollment>, FetchError> {
        match self.enrollments.get(&course_id) {
            Some(Some(enrollments)) => Ok(enrollments.clone()),
            Some(None) => Err(FetchError::status(500_u16, "enrollments unavailable")),
            None => Ok(Vec::new()),
        }
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, FetchError> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        let now_in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now_in_flight, Ordering::SeqCst);

        let delay = self
            .delays
            .get(&user_id)
            .copied()
            .unwrap_or(Duration::from_millis(1));
        tokio::time::sleep(delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.failing_users.contains(&user_id) {
            return Err(FetchError::status(404_u16, format!("user {user_id} missing")));
        }
        Ok(user(user_id.get()))
    }
}
