//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod resource_client;
mod roster_query;

#[cfg(test)]
pub use resource_client::MockResourceClient;
pub use resource_client::{FetchError, FixtureResourceClient, ResourceClient};
#[cfg(test)]
pub use roster_query::MockRosterQuery;
pub use roster_query::{FixtureRosterQuery, RosterQuery};
