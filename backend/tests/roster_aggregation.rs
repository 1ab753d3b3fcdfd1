//! Aggregation behaviour through the public `RosterQuery` surface.

use std::sync::Arc;
use std::time::Duration;

use roster::domain::ports::RosterQuery;
use roster::domain::{
    AggregationResult, ConcurrentJoinConfig, CourseFilter, CourseId, JoinStrategy, Resolution,
    RosterService, UserId,
};
use rstest::{fixture, rstest};

mod support;

use support::{InMemoryPlatform, course, enrollment, user};

#[fixture]
fn platform() -> InMemoryPlatform {
    InMemoryPlatform::default()
        .with_course(
            course(1, "Intro"),
            vec![
                enrollment(7, "2024-01-01T00:00:00Z"),
                enrollment(8, "2024-01-02T00:00:00Z"),
            ],
        )
        .with_course(course(2, "Advanced"), vec![enrollment(9, "2024-02-01T00:00:00Z")])
        .with_user(user(7, "Ada"))
        .with_user(user(9, "Grace"))
}

fn service(platform: InMemoryPlatform, strategy: JoinStrategy) -> RosterService {
    RosterService::new(platform.into_client(), strategy)
}

#[rstest]
#[case::concurrent(JoinStrategy::default())]
#[case::sequential(JoinStrategy::Sequential)]
#[tokio::test]
async fn named_course_with_one_missing_user(
    platform: InMemoryPlatform,
    #[case] strategy: JoinStrategy,
) {
    let result = service(platform, strategy)
        .aggregate(CourseFilter::ExactName("Intro".to_owned()))
        .await;

    let AggregationResult::Matched(roster) = result else {
        panic!("Intro should match, got {result:?}");
    };
    assert_eq!(roster.course.id, CourseId::new(1));
    assert_eq!(roster.resolution, Resolution::Resolved);
    assert_eq!(roster.enrollments.len(), 2);

    let ada = &roster.enrollments[0];
    assert_eq!(ada.user_id, UserId::new(7));
    assert_eq!(ada.user_name, "Ada");
    assert_eq!(ada.user_email, "ada@example.com");
    assert_eq!(ada.enrolled_at, "2024-01-01T00:00:00Z");

    let missing = &roster.enrollments[1];
    assert_eq!(missing.user_id, UserId::new(8));
    assert_eq!(missing.enrolled_at, "2024-01-02T00:00:00Z");
    assert!(missing.user_name.is_empty());
    assert!(missing.user_email.is_empty());
    assert_eq!(
        missing.resolution,
        Resolution::Degraded {
            reason: "learning platform returned status 404: user 8 not found".to_owned()
        }
    );
}

#[rstest]
#[tokio::test]
async fn listing_covers_every_course_in_catalogue_order(platform: InMemoryPlatform) {
    let result = service(platform, JoinStrategy::default())
        .aggregate(CourseFilter::All)
        .await;

    let names: Vec<_> = result
        .rosters()
        .iter()
        .map(|roster| roster.course.name.as_str())
        .collect();
    assert_eq!(names, vec!["Intro", "Advanced"]);
    assert_eq!(result.record_count(), 3);
    assert_eq!(result.degraded_count(), 1);
}

#[rstest]
#[tokio::test]
async fn unknown_course_is_no_match_not_an_empty_listing(platform: InMemoryPlatform) {
    let service = service(platform, JoinStrategy::default());

    let search = service
        .aggregate(CourseFilter::ExactName("Nonexistent".to_owned()))
        .await;
    let listing = service.aggregate(CourseFilter::All).await;

    assert_eq!(search, AggregationResult::NoMatch);
    assert!(matches!(listing, AggregationResult::Catalogue(ref rosters) if rosters.len() == 2));
}

#[tokio::test]
async fn catalogue_outage_yields_empty_results() {
    let service = service(InMemoryPlatform::default(), JoinStrategy::default());

    assert_eq!(
        service.aggregate(CourseFilter::All).await,
        AggregationResult::Catalogue(Vec::new())
    );
    assert_eq!(
        service
            .aggregate(CourseFilter::ExactName("Intro".to_owned()))
            .await,
        AggregationResult::NoMatch
    );
}

#[rstest]
#[tokio::test]
async fn enrollment_outage_degrades_only_that_course(platform: InMemoryPlatform) {
    let result = service(platform.with_unavailable_enrollments(2), JoinStrategy::default())
        .aggregate(CourseFilter::All)
        .await;

    let rosters = result.rosters();
    assert_eq!(rosters[0].resolution, Resolution::Resolved);
    assert_eq!(rosters[0].enrollments.len(), 2);
    assert!(rosters[1].enrollments.is_empty());
    assert_eq!(
        rosters[1].resolution,
        Resolution::Degraded {
            reason: "learning platform returned status 503: maintenance".to_owned()
        }
    );
}

#[tokio::test]
async fn slow_users_do_not_reorder_records() {
    let enrollments = (1..=8)
        .map(|id| enrollment(id, &format!("2024-03-{id:02}T00:00:00Z")))
        .collect();
    let platform = (1..=8_i64).fold(
        InMemoryPlatform::default().with_course(course(5, "Ops"), enrollments),
        |platform, id| {
            let latency = Duration::from_millis(u64::try_from(80 - id * 10).unwrap_or(0));
            platform
                .with_user(user(id, &format!("Learner{id}")))
                .with_latency(id, latency)
        },
    );
    let platform = Arc::new(platform);
    let service = RosterService::new(platform.clone(), JoinStrategy::default());

    let result = service
        .aggregate(CourseFilter::ExactName("Ops".to_owned()))
        .await;

    let ids: Vec<_> = result.rosters()[0]
        .enrollments
        .iter()
        .map(|record| record.user_id.get())
        .collect();
    assert_eq!(ids, (1..=8_i64).collect::<Vec<_>>());
    assert_eq!(platform.user_calls(), 8);
}

#[rstest]
#[tokio::test]
async fn lookup_timeout_degrades_a_stalled_user(platform: InMemoryPlatform) {
    let strategy = JoinStrategy::Concurrent(ConcurrentJoinConfig {
        max_in_flight: 4,
        lookup_timeout: Some(Duration::from_millis(50)),
    });
    let result = service(platform.with_latency(9, Duration::from_secs(10)), strategy)
        .aggregate(CourseFilter::ExactName("Advanced".to_owned()))
        .await;

    let record = &result.rosters()[0].enrollments[0];
    assert_eq!(record.user_id, UserId::new(9));
    assert!(record.resolution.is_degraded());
    assert!(record.user_name.is_empty());
}

#[rstest]
#[tokio::test]
async fn repeated_requests_are_independent(platform: InMemoryPlatform) {
    let service = service(platform, JoinStrategy::default());
    let first = service.aggregate(CourseFilter::All).await;
    let second = service.aggregate(CourseFilter::All).await;
    assert_eq!(first, second);
}
