//! Learning platform outbound adapter.
//!
//! This module provides the reqwest implementation of the `ResourceClient`
//! port against the platform's public REST API.

mod dto;
mod fingerprint;
mod http_client;

pub use fingerprint::api_key_fingerprint;
pub use http_client::{DEFAULT_API_BASE_URL, LearningPlatformHttpClient};
