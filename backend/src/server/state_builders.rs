//! Builders wiring the roster use-case to its upstream client.

use std::sync::Arc;

use roster::domain::ports::{FixtureResourceClient, ResourceClient, RosterQuery};
use roster::domain::{JoinStrategy, RosterService};
use roster::outbound::learning_platform::{LearningPlatformHttpClient, api_key_fingerprint};
use roster::settings::{RosterSettings, SettingsError};
use thiserror::Error;
use tracing::{info, warn};

/// Failures while wiring the roster service.
#[derive(Debug, Error)]
pub enum StateBuildError {
    /// Settings failed validation.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The reqwest client could not be constructed.
    #[error("failed to build learning platform client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Build the upstream client: the live platform, or the empty fixture when
/// fixture mode is on.
fn build_resource_client(
    settings: &RosterSettings,
) -> Result<Arc<dyn ResourceClient>, StateBuildError> {
    if settings.fixture_mode {
        warn!("fixture mode enabled; serving the empty fixture catalogue");
        return Ok(Arc::new(FixtureResourceClient));
    }

    let api_key = settings.api_key()?;
    let base_url = settings.api_base_url()?;
    let timeout = settings.request_timeout()?;
    info!(
        api_base_url = %base_url,
        api_key_fingerprint = %api_key_fingerprint(&api_key),
        timeout_secs = timeout.as_secs(),
        "learning platform client configured"
    );
    Ok(Arc::new(LearningPlatformHttpClient::new(
        base_url, api_key, timeout,
    )?))
}

/// Build the roster use-case from validated settings.
///
/// # Errors
/// Returns [`StateBuildError`] when settings are invalid or the HTTP client
/// cannot be constructed.
pub fn build_roster_query(
    settings: &RosterSettings,
) -> Result<Arc<dyn RosterQuery>, StateBuildError> {
    let strategy = settings.join_strategy()?;
    log_strategy(strategy);
    let client = build_resource_client(settings)?;
    Ok(Arc::new(RosterService::new(client, strategy)))
}

fn log_strategy(strategy: JoinStrategy) {
    match strategy {
        JoinStrategy::Concurrent(config) => info!(
            join_mode = "concurrent",
            max_in_flight = config.max_in_flight.max(1),
            lookup_timeout_secs = config.lookup_timeout.map(|limit| limit.as_secs()),
            "roster join strategy selected"
        ),
        JoinStrategy::Sequential => {
            info!(join_mode = "sequential", "roster join strategy selected");
        }
    }
}
