//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FixtureRosterQuery, RosterQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Roster aggregation use-case.
    pub roster: Arc<dyn RosterQuery>,
}

impl HttpState {
    /// Construct state from the roster port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use roster::domain::ports::FixtureRosterQuery;
    /// use roster::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureRosterQuery));
    /// let _ = state.roster.clone();
    /// ```
    pub fn new(roster: Arc<dyn RosterQuery>) -> Self {
        Self { roster }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureRosterQuery))
    }
}
