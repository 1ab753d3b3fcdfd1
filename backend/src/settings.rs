//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ROSTER_*` environment variables, or a config
//! file, and are validated once at startup into typed values. Nothing reads
//! the environment after that.

use std::fmt;
use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::domain::{ConcurrentJoinConfig, DEFAULT_MAX_CONCURRENT_LOOKUPS, JoinStrategy};
use crate::outbound::learning_platform::DEFAULT_API_BASE_URL;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Reasons the loaded settings cannot start the service.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No API key was supplied while upstream calls are enabled.
    #[error("ROSTER_API_KEY must be set unless fixture mode is enabled")]
    MissingApiKey,
    /// The base URL does not parse.
    #[error("invalid API base URL {value:?}: {source}")]
    InvalidBaseUrl {
        /// Configured value.
        value: String,
        /// Parser failure.
        source: url::ParseError,
    },
    /// The join mode is neither `concurrent` nor `sequential`.
    #[error("invalid join mode {value:?}; expected \"concurrent\" or \"sequential\"")]
    InvalidJoinMode {
        /// Configured value.
        value: String,
    },
    /// The bind address does not parse.
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        /// Configured value.
        value: String,
        /// Parser failure.
        source: AddrParseError,
    },
    /// A timeout was configured as zero seconds.
    #[error("{setting} must be at least one second")]
    ZeroTimeout {
        /// Offending setting name.
        setting: &'static str,
    },
}

/// Configuration values for the roster service.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct RosterSettings {
    /// Learning platform API key.
    pub api_key: Option<String>,
    /// Learning platform API root.
    pub api_base_url: Option<String>,
    /// Whole-request timeout for upstream calls, in seconds.
    pub request_timeout_secs: Option<u64>,
    /// `concurrent` (default) or `sequential` user lookups.
    pub join_mode: Option<String>,
    /// Cap on user lookups in flight per course.
    pub max_concurrent_lookups: Option<usize>,
    /// Optional budget for one user lookup, in seconds.
    pub user_lookup_timeout_secs: Option<u64>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Serve the empty fixture catalogue instead of calling upstream.
    #[ortho_config(default = false)]
    pub fixture_mode: bool,
}

impl fmt::Debug for RosterSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RosterSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("join_mode", &self.join_mode)
            .field("max_concurrent_lookups", &self.max_concurrent_lookups)
            .field("user_lookup_timeout_secs", &self.user_lookup_timeout_secs)
            .field("bind_addr", &self.bind_addr)
            .field("fixture_mode", &self.fixture_mode)
            .finish()
    }
}

impl RosterSettings {
    /// Return the API key, wiped from memory when dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingApiKey`] when the key is absent or blank.
    pub fn api_key(&self) -> Result<Zeroizing<String>, SettingsError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| Zeroizing::new(key.to_owned()))
            .ok_or(SettingsError::MissingApiKey)
    }

    /// Return the configured API root, falling back to the public default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBaseUrl`] when the value does not parse.
    pub fn api_base_url(&self) -> Result<Url, SettingsError> {
        let value = self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL);
        Url::parse(value).map_err(|source| SettingsError::InvalidBaseUrl {
            value: value.to_owned(),
            source,
        })
    }

    /// Return the upstream request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] for a zero value.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        non_zero_secs(secs, "request_timeout_secs")
    }

    /// Return the user lookup strategy.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidJoinMode`] for an unknown mode and
    /// [`SettingsError::ZeroTimeout`] for a zero lookup timeout.
    pub fn join_strategy(&self) -> Result<JoinStrategy, SettingsError> {
        let mode = self
            .join_mode
            .as_deref()
            .map(|mode| mode.trim().to_ascii_lowercase());
        match mode.as_deref() {
            None | Some("concurrent") => {
                let lookup_timeout = self
                    .user_lookup_timeout_secs
                    .map(|secs| non_zero_secs(secs, "user_lookup_timeout_secs"))
                    .transpose()?;
                Ok(JoinStrategy::Concurrent(ConcurrentJoinConfig {
                    max_in_flight: self
                        .max_concurrent_lookups
                        .unwrap_or(DEFAULT_MAX_CONCURRENT_LOOKUPS),
                    lookup_timeout,
                }))
            }
            Some("sequential") => Ok(JoinStrategy::Sequential),
            Some(_) => Err(SettingsError::InvalidJoinMode {
                value: self.join_mode.clone().unwrap_or_default(),
            }),
        }
    }

    /// Return the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                source,
            })
    }
}

fn non_zero_secs(secs: u64, setting: &'static str) -> Result<Duration, SettingsError> {
    if secs == 0 {
        return Err(SettingsError::ZeroTimeout { setting });
    }
    Ok(Duration::from_secs(secs))
}
