//! Shared helpers for roster integration tests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use roster::domain::ports::{FetchError, ResourceClient};
use roster::domain::{Course, CourseId, Enrollment, User, UserId};

pub fn course(id: i64, name: &str) -> Course {
    Course {
        id: CourseId::new(id),
        name: name.to_owned(),
        description: None,
        heading: None,
        is_published: true,
        image_url: None,
    }
}

pub fn enrollment(user_id: i64, enrolled_at: &str) -> Enrollment {
    Enrollment {
        user_id: UserId::new(user_id),
        enrolled_at: enrolled_at.to_owned(),
        completed_at: None,
        percent_complete: 0,
        expires_at: None,
    }
}

pub fn user(id: i64, name: &str) -> User {
    User {
        id: UserId::new(id),
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: "student".to_owned(),
        last_sign_in_ip: None,
        courses: Vec::new(),
    }
}

/// In-memory learning platform with per-user latency and failure injection.
#[derive(Default)]
pub struct InMemoryPlatform {
    courses: Option<Vec<Course>>,
    enrollments: HashMap<CourseId, Vec<Enrollment>>,
    unavailable_courses: HashSet<CourseId>,
    users: HashMap<UserId, User>,
    latency: HashMap<UserId, Duration>,
    user_calls: AtomicUsize,
}

impl InMemoryPlatform {
    pub fn with_course(mut self, course: Course, enrollments: Vec<Enrollment>) -> Self {
        self.enrollments.insert(course.id, enrollments);
        self.courses.get_or_insert_with(Vec::new).push(course);
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.id, user);
        self
    }

    pub fn with_latency(mut self, user_id: i64, latency: Duration) -> Self {
        self.latency.insert(UserId::new(user_id), latency);
        self
    }

    pub fn with_unavailable_enrollments(mut self, course_id: i64) -> Self {
        self.unavailable_courses.insert(CourseId::new(course_id));
        self
    }

    pub fn into_client(self) -> Arc<dyn ResourceClient> {
        Arc::new(self)
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResourceClient for InMemoryPlatform {
    async fn list_courses(&self) -> Result<Vec<Course>, FetchError> {
        self.courses
            .clone()
            .ok_or_else(|| FetchError::transport("catalogue offline"))
    }

    async fn list_enrollments(&self, course_id: CourseId) -> Result<Vec<Enrollment>, FetchError> {
        if self.unavailable_courses.contains(&course_id) {
            return Err(FetchError::status(503_u16, "maintenance"));
        }
        Ok(self
            .enrollments
            .get(&course_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, FetchError> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency.get(&user_id) {
            tokio::time::sleep(*latency).await;
        }
        self.users
            .get(&user_id)
            .cloned()
            .ok_or_else(|| FetchError::status(404_u16, format!("user {user_id} not found")))
    }
}
