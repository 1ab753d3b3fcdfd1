//! DTOs for decoding learning platform JSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! records in one pass. Optional strings tolerate both `null` and absence.
//! Every other field falls back to its zero value when it is missing or
//! `null`, so one sparse row never fails the whole payload.

use serde::{Deserialize, Deserializer};

use crate::domain::{Course, CourseId, Enrollment, User, UserCourseMembership, UserId};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Pagination block shared by the list endpoints.
#[derive(Debug, Default, Deserialize)]
pub(super) struct MetaDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) total: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) number_of_pages: u32,
}

impl MetaDto {
    pub(super) fn has_more_pages(&self) -> bool {
        self.number_of_pages > self.page.max(1)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CoursesResponseDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) courses: Vec<CourseDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) meta: MetaDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct CourseDto {
    #[serde(default, deserialize_with = "null_as_default")]
    id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    description: Option<String>,
    heading: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    is_published: bool,
    image_url: Option<String>,
}

impl From<CourseDto> for Course {
    fn from(value: CourseDto) -> Self {
        Self {
            id: CourseId::new(value.id),
            name: value.name,
            description: value.description,
            heading: value.heading,
            is_published: value.is_published,
            image_url: value.image_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct EnrollmentsResponseDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) enrollments: Vec<EnrollmentDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) meta: MetaDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct EnrollmentDto {
    #[serde(default, deserialize_with = "null_as_default")]
    user_id: i64,
    #[serde(default)]
    enrolled_at: Option<String>,
    completed_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    percent_complete: u32,
    expires_at: Option<String>,
}

impl From<EnrollmentDto> for Enrollment {
    fn from(value: EnrollmentDto) -> Self {
        Self {
            user_id: UserId::new(value.user_id),
            enrolled_at: value.enrolled_at.unwrap_or_default(),
            completed_at: value.completed_at,
            percent_complete: value.percent_complete,
            expires_at: value.expires_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    #[serde(default, deserialize_with = "null_as_default")]
    id: i64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
    last_sign_in_ip: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    courses: Vec<UserCourseDto>,
}

#[derive(Debug, Deserialize)]
struct UserCourseDto {
    #[serde(default, deserialize_with = "null_as_default")]
    course_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    course_name: String,
    enrolled_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    is_active_enrollment: bool,
    completed_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    percent_complete: u32,
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        Self {
            id: UserId::new(value.id),
            name: value.name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            role: value.role.unwrap_or_default(),
            last_sign_in_ip: value.last_sign_in_ip,
            courses: value
                .courses
                .into_iter()
                .map(|course| UserCourseMembership {
                    course_id: course.course_id,
                    course_name: course.course_name,
                    enrolled_at: course.enrolled_at,
                    is_active_enrollment: course.is_active_enrollment,
                    completed_at: course.completed_at,
                    percent_complete: course.percent_complete,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for payload decoding.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn course_envelope_tolerates_nulls_and_missing_fields() {
        let body = r#"{
            "courses": [
                {"id": 1, "name": "Intro", "description": null, "heading": "Start here",
                 "is_published": true, "image_url": null},
                {"id": 2, "name": "Advanced"}
            ],
            "meta": {"total": 2, "page": 1, "from": 1, "to": 2, "per_page": 20, "number_of_pages": 1}
        }"#;

        let decoded: CoursesResponseDto = serde_json::from_str(body).expect("courses decode");
        let courses: Vec<Course> = decoded.courses.into_iter().map(Course::from).collect();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].heading.as_deref(), Some("Start here"));
        assert!(courses[0].description.is_none());
        assert!(!courses[1].is_published);
        assert!(!decoded.meta.has_more_pages());
    }

    #[rstest]
    fn enrollment_null_timestamps_decode_to_none() {
        let body = r#"{
            "enrollments": [
                {"user_id": 7, "enrolled_at": "2024-01-01T00:00:00Z", "completed_at": null,
                 "percent_complete": 40, "expires_at": null}
            ]
        }"#;

        let decoded: EnrollmentsResponseDto = serde_json::from_str(body).expect("enrollments decode");
        let enrollment = Enrollment::from(
            decoded
                .enrollments
                .into_iter()
                .next()
                .expect("one enrollment"),
        );

        assert_eq!(enrollment.user_id, UserId::new(7));
        assert_eq!(enrollment.percent_complete, 40);
        assert!(enrollment.completed_at.is_none());
        assert!(enrollment.expires_at.is_none());
        assert_eq!(decoded.meta.total, 0);
    }

    #[rstest]
    fn user_payload_maps_memberships() {
        let body = r#"{
            "id": 8, "name": "Grace", "email": "grace@example.com", "role": "student",
            "last_sign_in_ip": null,
            "courses": [
                {"course_id": 1, "course_name": "Intro", "enrolled_at": "2024-01-01T00:00:00Z",
                 "is_active_enrollment": true, "completed_at": null, "percent_complete": 100}
            ]
        }"#;

        let user = User::from(serde_json::from_str::<UserDto>(body).expect("user decode"));

        assert_eq!(user.name, "Grace");
        assert_eq!(user.courses.len(), 1);
        assert!(user.courses[0].is_active_enrollment);
        assert_eq!(user.courses[0].percent_complete, 100);
    }

    #[rstest]
    fn explicit_nulls_in_course_rows_fall_back_to_zero_values() {
        let body = r#"{
            "courses": [
                {"id": 1, "name": null, "is_published": null},
                {"id": 2, "name": "Advanced", "is_published": true}
            ],
            "meta": null
        }"#;

        let decoded: CoursesResponseDto = serde_json::from_str(body).expect("courses decode");
        let courses: Vec<Course> = decoded.courses.into_iter().map(Course::from).collect();

        assert_eq!(courses.len(), 2);
        assert!(courses[0].name.is_empty());
        assert!(!courses[0].is_published);
        assert_eq!(courses[1].name, "Advanced");
        assert!(courses[1].is_published);
    }

    #[rstest]
    fn explicit_null_listing_decodes_empty() {
        let decoded: EnrollmentsResponseDto =
            serde_json::from_str(r#"{"enrollments": null, "meta": {"page": null}}"#)
                .expect("enrollments decode");
        assert!(decoded.enrollments.is_empty());
        assert!(!decoded.meta.has_more_pages());
    }

    #[rstest]
    fn explicit_null_progress_decodes_as_zero() {
        let body = r#"{
            "enrollments": [
                {"user_id": 7, "enrolled_at": null, "percent_complete": null}
            ]
        }"#;

        let decoded: EnrollmentsResponseDto = serde_json::from_str(body).expect("enrollments decode");
        let enrollment = Enrollment::from(
            decoded
                .enrollments
                .into_iter()
                .next()
                .expect("one enrollment"),
        );

        assert_eq!(enrollment.user_id, UserId::new(7));
        assert_eq!(enrollment.percent_complete, 0);
        assert!(enrollment.enrolled_at.is_empty());
    }

    #[rstest]
    #[case::null_memberships(r#"{"id": 8, "name": "Grace", "courses": null}"#, 0)]
    #[case::null_membership_fields(
        r#"{"id": 8, "name": "Grace", "courses": [
            {"course_id": 1, "course_name": null, "is_active_enrollment": null,
             "percent_complete": null}
        ]}"#,
        1
    )]
    fn explicit_nulls_in_user_payload_keep_the_user(
        #[case] body: &str,
        #[case] memberships: usize,
    ) {
        let user = User::from(serde_json::from_str::<UserDto>(body).expect("user decode"));

        assert_eq!(user.name, "Grace");
        assert_eq!(user.courses.len(), memberships);
        for membership in &user.courses {
            assert!(membership.course_name.is_empty());
            assert!(!membership.is_active_enrollment);
            assert_eq!(membership.percent_complete, 0);
        }
    }

    #[rstest]
    #[case::single_page(1, 1, false)]
    #[case::first_of_three(1, 3, true)]
    #[case::last_of_three(3, 3, false)]
    #[case::missing_meta(0, 0, false)]
    fn detects_additional_pages(#[case] page: u32, #[case] pages: u32, #[case] expected: bool) {
        let meta = MetaDto {
            total: 0,
            page,
            number_of_pages: pages,
        };
        assert_eq!(meta.has_more_pages(), expected);
    }
}
