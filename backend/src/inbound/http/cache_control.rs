//! Cache-control policies for HTTP handlers.
//!
//! Roster payloads reflect live upstream data and carry learner email
//! addresses, so shared caches must never store them.

use actix_web::http::header;

/// Private responses must always be revalidated before reuse.
pub const PRIVATE_NO_CACHE_MUST_REVALIDATE: &str = "private, no-cache, must-revalidate";

/// Probe responses are never stored.
pub const NO_STORE: &str = "no-store";

/// Build the cache-control header tuple for roster responses.
#[must_use]
pub fn private_no_cache_header() -> (header::HeaderName, &'static str) {
    (header::CACHE_CONTROL, PRIVATE_NO_CACHE_MUST_REVALIDATE)
}

/// Build the cache-control header tuple for health probes.
#[must_use]
pub fn no_store_header() -> (header::HeaderName, &'static str) {
    (header::CACHE_CONTROL, NO_STORE)
}
