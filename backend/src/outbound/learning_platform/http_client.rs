//! Reqwest-backed learning platform client.
//!
//! This adapter owns transport details only: URL construction, credentials,
//! timeout and HTTP error mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::{CoursesResponseDto, EnrollmentsResponseDto, MetaDto, UserDto};
use crate::domain::ports::{FetchError, ResourceClient};
use crate::domain::{Course, CourseId, Enrollment, User, UserId};

/// Public API root used when no base URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://developers.teachable.com/v1/";
const API_KEY_HEADER: &str = "apiKey";

/// Learning platform adapter issuing authenticated GET requests.
///
/// Only the first page of each listing is read.
pub struct LearningPlatformHttpClient {
    client: Client,
    base_url: Url,
    api_key: Zeroizing<String>,
}

impl LearningPlatformHttpClient {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let client = LearningPlatformHttpClient::new(base_url, api_key, timeout);
    /// assert!(client.is_ok() || client.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        api_key: Zeroizing<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
            api_key,
        })
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path).map_err(|error| {
            FetchError::transport(format!("invalid request path {path}: {error}"))
        })?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref()).map_err(|error| {
            FetchError::decode(format!("invalid JSON payload from {path}: {error}"))
        })
    }
}

#[async_trait]
impl ResourceClient for LearningPlatformHttpClient {
    async fn list_courses(&self) -> Result<Vec<Course>, FetchError> {
        let decoded: CoursesResponseDto = self.get_json("courses").await?;
        note_unread_pages("courses", &decoded.meta);
        Ok(decoded.courses.into_iter().map(Course::from).collect())
    }

    async fn list_enrollments(&self, course_id: CourseId) -> Result<Vec<Enrollment>, FetchError> {
        let path = format!("courses/{course_id}/enrollments");
        let decoded: EnrollmentsResponseDto = self.get_json(&path).await?;
        note_unread_pages(&path, &decoded.meta);
        Ok(decoded
            .enrollments
            .into_iter()
            .map(Enrollment::from)
            .collect())
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, FetchError> {
        let decoded: UserDto = self.get_json(&format!("users/{user_id}")).await?;
        Ok(User::from(decoded))
    }
}

fn note_unread_pages(path: &str, meta: &MetaDto) {
    if meta.has_more_pages() {
        debug!(
            path,
            total = meta.total,
            pages = meta.number_of_pages,
            "listing has further pages; only the first page is read"
        );
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn map_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::timeout(error.to_string())
    } else {
        FetchError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> FetchError {
    FetchError::status(status.as_u16(), body_preview(body))
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
